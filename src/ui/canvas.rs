//! Central canvas UI: error line and the current artifact.

use super::colors;
use crate::controller::ViewController;
use crate::render::ArtifactTexture;
use eframe::egui::{self, RichText};
use web_time::Instant;

pub fn render_canvas(
    ctx: &egui::Context,
    controller: &ViewController,
    artifact: Option<&ArtifactTexture>,
    now: Instant,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::central_panel(&ctx.style()).fill(colors::canvas::BACKGROUND))
        .show(ctx, |ui| {
            if let Some(message) = controller.error_message() {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(message).color(colors::ui::ERROR).strong());
                });
                ui.add_space(6.0);
            }

            match artifact.and_then(|a| a.current(now)) {
                Some(texture) => {
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Image::new(texture).shrink_to_fit());
                    });
                }
                None if controller.is_loading() => {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new("Pilih parameter lalu tekan \"Gambar Statis\".")
                                .color(colors::ui::LABEL),
                        );
                    });
                }
            }
        });
}

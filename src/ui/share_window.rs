//! Share link window: dismissible, read-only, selects on click.

use super::colors;
use crate::controller::ViewController;
use eframe::egui::{self, RichText};
use eframe::egui::text::{CCursor, CCursorRange};

pub fn render_share_window(ctx: &egui::Context, controller: &mut ViewController) {
    let Some(link) = controller.share_link().map(str::to_string) else {
        return;
    };

    let mut open = true;
    egui::Window::new("Bagikan peta ini")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -60.0))
        .show(ctx, |ui| {
            let mut text: &str = &link;
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .desired_width(420.0)
                    .font(egui::FontId::monospace(12.0)),
            );
            if response.clicked() {
                select_all(ui.ctx(), response.id, link.chars().count());
            }

            ui.horizontal(|ui| {
                if ui.button("Salin").clicked() {
                    ui.ctx().copy_text(link.clone());
                    log::debug!("Share link copied to clipboard");
                }
                ui.label(
                    RichText::new("Klik tautan untuk memilih")
                        .small()
                        .color(colors::ui::SUCCESS),
                );
            });
        });

    if !open {
        controller.dismiss_share_link();
    }
}

fn select_all(ctx: &egui::Context, id: egui::Id, len: usize) {
    if let Some(mut state) = egui::TextEdit::load_state(ctx, id) {
        state
            .cursor
            .set_char_range(Some(CCursorRange::two(CCursor::new(0), CCursor::new(len))));
        state.store(ctx, id);
    }
}

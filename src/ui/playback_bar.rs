//! Bottom panel UI: client-side animation controls.

use super::colors;
use crate::controller::ViewController;
use crate::state::{AnimationState, HOURS_PER_DAY};
use eframe::egui::{self, RichText};

pub fn render_playback_bar(ctx: &egui::Context, controller: &mut ViewController) {
    egui::TopBottomPanel::bottom("playback_bar")
        .exact_height(40.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let state = controller.animation_state();

                if ui
                    .button(RichText::new(state.toggle_label()).size(14.0))
                    .clicked()
                {
                    controller.toggle_animation(web_time::Instant::now());
                }

                if ui
                    .button(RichText::new("\u{23F9} Stop").size(14.0))
                    .clicked()
                {
                    controller.stop_animation();
                }

                ui.separator();

                let (label, color) = match state {
                    AnimationState::Playing => ("PLAYING", colors::playback::PLAYING),
                    AnimationState::Paused => ("PAUSED", colors::playback::PAUSED),
                    AnimationState::Stopped => ("STOPPED", colors::playback::STOPPED),
                };
                ui.label(RichText::new(label).monospace().size(12.0).color(color));

                ui.separator();

                ui.label(
                    RichText::new(format!(
                        "{}  ({} / {})",
                        controller.time_label().unwrap_or("--:--"),
                        controller.time_index() + 1,
                        HOURS_PER_DAY
                    ))
                    .monospace()
                    .size(13.0)
                    .color(colors::ui::ACTIVE),
                );
            });
        });
}

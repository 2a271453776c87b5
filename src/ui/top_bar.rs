//! Top bar UI: app title, forecast date, and status.

use super::colors;
use crate::controller::ViewController;
use eframe::egui::{self, RichText};

pub fn render_top_bar(ctx: &egui::Context, controller: &ViewController) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("Visualisasi Cuaca Indonesia")
                        .strong()
                        .size(16.0)
                        .color(colors::ui::ACTIVE),
                );

                ui.separator();

                ui.label(
                    RichText::new(format!("WRF {}", controller.time_options().date()))
                        .size(12.0)
                        .color(colors::ui::LABEL),
                );

                ui.separator();

                if controller.is_loading() {
                    ui.spinner();
                }
                let color = if controller.error().is_some() {
                    colors::ui::ERROR
                } else {
                    colors::ui::LABEL
                };
                ui.label(RichText::new(status_text(controller)).size(13.0).color(color));
            });
        });
}

fn status_text(controller: &ViewController) -> String {
    if controller.is_loading() {
        return "Memuat...".to_string();
    }
    if controller.error().is_some() {
        return "Gagal".to_string();
    }
    match controller.current_artifact() {
        Some(request) => {
            let subject = if request.include_wind {
                format!("{} + angin", request.parameter.label())
            } else {
                request.parameter.label().to_string()
            };
            match request.time_index {
                Some(index) => format!(
                    "{} \u{2022} {}",
                    subject,
                    controller
                        .time_options()
                        .label(index)
                        .unwrap_or("--:--")
                ),
                None => format!("{} \u{2022} animasi", subject),
            }
        }
        None => "Siap".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelConfig;
    use crate::controller::Command;

    fn show_current_frame(controller: &mut ViewController) {
        controller.request_frame();
        for command in controller.take_commands() {
            if let Command::FetchImage { seq, .. } = command {
                controller.complete_image::<_, String>(seq, Ok(()));
            }
        }
    }

    #[test]
    fn test_status_names_frame_and_overlay() {
        let mut controller =
            ViewController::new(&PanelConfig::default(), "http://localhost".to_string());
        assert_eq!(status_text(&controller), "Siap");

        controller.select_time(5);
        controller.take_commands();
        show_current_frame(&mut controller);
        assert!(status_text(&controller).ends_with("05:00"));
        assert!(!status_text(&controller).contains("angin"));

        assert!(controller.set_include_wind(true));
        show_current_frame(&mut controller);
        assert!(status_text(&controller).contains(" + angin"));
    }
}

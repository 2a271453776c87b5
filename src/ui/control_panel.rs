//! Left panel UI: parameter, time, overlay, and render actions.

use crate::controller::ViewController;
use crate::state::{Parameter, TimeStep};
use eframe::egui::{self, RichText};

pub fn render_control_panel(ctx: &egui::Context, controller: &mut ViewController) {
    egui::SidePanel::left("control_panel")
        .resizable(true)
        .default_width(260.0)
        .min_width(220.0)
        .max_width(400.0)
        .show(ctx, |ui| {
            ui.heading("Kontrol");
            ui.separator();

            ui.label(
                RichText::new(format!(
                    "Aplikasi ini menampilkan visualisasi prakiraan cuaca untuk Indonesia \
                     menggunakan model WRF tanggal {}.",
                    controller.time_options().date()
                ))
                .small(),
            );
            ui.add_space(10.0);

            render_parameter_section(ui, controller);
            ui.add_space(8.0);

            render_time_section(ui, controller);
            ui.add_space(8.0);

            render_overlay_section(ui, controller);
            ui.add_space(12.0);

            render_actions(ui, controller);
        });
}

fn render_parameter_section(ui: &mut egui::Ui, controller: &mut ViewController) {
    ui.label(RichText::new("Pilih Parameter:").strong());

    let current = controller.parameter();
    egui::ComboBox::from_id_salt("parameter_selector")
        .selected_text(current.label())
        .width(220.0)
        .show_ui(ui, |ui| {
            for parameter in Parameter::all() {
                let clicked = ui
                    .selectable_label(current == *parameter, parameter.label())
                    .clicked();
                if clicked && current != *parameter {
                    controller.set_parameter(*parameter);
                }
            }
        });
}

fn render_time_section(ui: &mut egui::Ui, controller: &mut ViewController) {
    ui.label(RichText::new("Waktu:").strong());

    let enabled = controller.step_controls_enabled();
    ui.add_enabled_ui(enabled, |ui| {
        ui.horizontal(|ui| {
            if ui.button("\u{25C0}").clicked() {
                controller.step_time(TimeStep::Backward);
            }

            let current = controller.time_index();
            let selected = controller.time_label().unwrap_or("--:--").to_string();
            let mut choice = None;
            egui::ComboBox::from_id_salt("time_selector")
                .selected_text(selected)
                .width(90.0)
                .show_ui(ui, |ui| {
                    for (index, label) in controller.time_options().selectable_labels().iter().enumerate() {
                        if ui.selectable_label(index == current, label).clicked() {
                            choice = Some(index);
                        }
                    }
                });
            if let Some(index) = choice {
                controller.select_time(index);
            }

            if ui.button("\u{25B6}").clicked() {
                controller.step_time(TimeStep::Forward);
            }
        });
    });
}

fn render_overlay_section(ui: &mut egui::Ui, controller: &mut ViewController) {
    let mut include_wind = controller.include_wind();
    let response = ui.add_enabled(
        controller.overlay_enabled(),
        egui::Checkbox::new(&mut include_wind, "Tampilkan Overlay Vektor Angin"),
    );
    if response.changed() {
        controller.set_include_wind(include_wind);
    }
}

fn render_actions(ui: &mut egui::Ui, controller: &mut ViewController) {
    ui.horizontal_wrapped(|ui| {
        if ui.button("Gambar Statis").clicked() {
            controller.request_frame();
        }
        if ui.button("Gambar Animasi").clicked() {
            controller.request_animation();
        }
        if ui.button("\u{1F517} Bagikan").clicked() {
            controller.create_share_link();
        }
    });
}

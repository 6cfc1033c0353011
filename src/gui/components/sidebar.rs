// src/gui/components/sidebar.rs
//
// Left configuration panel: post-pass filters and processing knobs.
// Filters apply when a pass finishes, so changes here take effect on the next run.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Configuration");
    ui.separator();

    let running = app.running();
    let process = &mut app.state.options.process;

    ui.add_enabled_ui(!running, |ui| {
        ui.label(egui::RichText::new("Filters").strong());
        if ui.checkbox(&mut process.hr_only, "HR-related profiles only").changed() {
            logf!("UI: hr_only → {}", process.hr_only);
        }
        if ui.checkbox(&mut process.certified_only, "Certified professionals only").changed() {
            logf!("UI: certified_only → {}", process.certified_only);
        }

        ui.add_space(8.0);
        ui.label(egui::RichText::new("Processing").strong());

        ui.horizontal(|ui| {
            ui.label("Pause:");
            ui.add(
                egui::DragValue::new(&mut process.pause_ms)
                    .range(0..=5000)
                    .speed(50)
                    .suffix(" ms"),
            );
        });

        let mut fixed = process.seed.is_some();
        if ui.checkbox(&mut fixed, "Fixed seed").changed() {
            process.seed = fixed.then_some(0);
            logf!("UI: seed → {:?}", process.seed);
        }
        if let Some(seed) = process.seed.as_mut() {
            ui.add(egui::DragValue::new(seed).speed(1));
        }
    });

    ui.add_space(16.0);
    ui.separator();
    ui.small("Demo: profile details are generated placeholders, not fetched from LinkedIn.");
}

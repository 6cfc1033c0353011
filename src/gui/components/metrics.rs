// src/gui/components/metrics.rs
//
// Headline counts and the certification breakdown for the Results tab.

use eframe::egui::{self, RichText};

use crate::data::{cert_counts, CertField, SelectionView, Summary};

pub fn draw_summary(ui: &mut egui::Ui, summary: &Summary) {
    ui.columns(4, |cols| {
        for (col, (label, n)) in cols.iter_mut().zip(summary.metrics()) {
            col.vertical(|ui| {
                ui.label(label);
                ui.label(RichText::new(n.to_string()).heading().strong());
            });
        }
    });
}

/// Bar charts of certification codes and providers. Nothing if no row is certified.
pub fn draw_cert_analysis(ui: &mut egui::Ui, view: &SelectionView<'_>) {
    let by_code = cert_counts(view.iter(), CertField::Code);
    if by_code.is_empty() {
        return;
    }
    let by_provider = cert_counts(view.iter(), CertField::Provider);

    egui::CollapsingHeader::new("Certification Analysis")
        .default_open(true)
        .show(ui, |ui| {
            ui.columns(2, |cols| {
                bars(&mut cols[0], "Certifications", &by_code);
                bars(&mut cols[1], "Providers", &by_provider);
            });
        });
}

fn bars(ui: &mut egui::Ui, title: &str, counts: &[(String, usize)]) {
    ui.label(RichText::new(title).strong());
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
    for (name, n) in counts {
        ui.add(
            egui::ProgressBar::new(*n as f32 / max as f32)
                .text(format!("{name}: {n}")),
        );
    }
}

use crate::theme::*;
use crate::widgets::{card_frame, chip, tab_intro};
use eframe::egui;
use sdex_core::content::CASE_STUDIES;
use sdex_core::Tab;

#[derive(Default)]
pub struct ExamplesPanel {
    pub selected: usize,
}

pub fn render(ui: &mut egui::Ui, panel: &mut ExamplesPanel) {
    tab_intro(ui, Tab::Examples);

    ui.columns(3, |cols| {
        for (idx, study) in CASE_STUDIES.iter().enumerate() {
            let ui = &mut cols[idx];
            let active = panel.selected == idx;

            let response = egui::Frame::none()
                .fill(if active { COLOR_CARD } else { COLOR_PANEL })
                .rounding(14.0)
                .stroke(egui::Stroke::new(
                    1.5,
                    if active { COLOR_ACCENT } else { COLOR_BORDER },
                ))
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(study.glyph).size(24.0));
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(study.title)
                            .strong()
                            .size(16.0)
                            .color(COLOR_TEXT),
                    );
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(study.blurb).small().color(COLOR_TEXT_DIM));
                    ui.add_space(8.0);
                    chip(ui, study.protocol, COLOR_ACCENT, COLOR_BG);
                })
                .response;

            if response.interact(egui::Sense::click()).clicked() {
                panel.selected = idx;
                log::debug!("examples: selected {}", study.title);
            }
        }
    });

    ui.add_space(16.0);
    let study = &CASE_STUDIES[panel.selected];
    card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new(format!("{} {} Flow", study.glyph, study.title))
                .strong()
                .size(18.0)
                .color(COLOR_TEXT),
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new(study.details).color(COLOR_TEXT_DIM));
        ui.add_space(12.0);
        for item in study.highlights {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("▸").color(COLOR_ACCENT));
                ui.label(egui::RichText::new(*item).small().color(COLOR_TEXT_DIM));
            });
        }
    });
}

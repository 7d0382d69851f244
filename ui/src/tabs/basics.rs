use crate::theme::*;
use crate::widgets::{chip, tab_intro};
use eframe::egui;
use sdex_core::content::{KEY_INSIGHT, ROLES};
use sdex_core::Tab;

#[derive(Default)]
pub struct BasicsPanel {
    pub active_role: Option<usize>,
}

pub fn render(ui: &mut egui::Ui, panel: &mut BasicsPanel) {
    tab_intro(ui, Tab::Basics);

    let mut hovered = None;
    ui.columns(3, |cols| {
        for (idx, role) in ROLES.iter().enumerate() {
            let ui = &mut cols[idx];
            let active = panel.active_role == Some(idx);

            let response = egui::Frame::none()
                .fill(if active { COLOR_CARD } else { COLOR_PANEL })
                .rounding(12.0)
                .stroke(egui::Stroke::new(
                    1.5,
                    if active { COLOR_ACCENT } else { COLOR_BORDER },
                ))
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(role.glyph).size(30.0));
                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(role.title)
                                .strong()
                                .size(17.0)
                                .color(COLOR_TEXT),
                        );
                        ui.label(
                            egui::RichText::new(role.role.to_uppercase())
                                .small()
                                .strong()
                                .color(COLOR_ACCENT),
                        );
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new(role.description)
                                .small()
                                .color(COLOR_TEXT_DIM),
                        );
                        ui.add_space(8.0);
                        ui.horizontal_wrapped(|ui| {
                            for example in role.examples {
                                chip(ui, example, COLOR_TEXT_DIM, COLOR_BG);
                            }
                        });
                    });
                })
                .response;

            if response.hovered() {
                hovered = Some(idx);
            }
        }
    });
    panel.active_role = hovered;

    ui.add_space(16.0);
    egui::Frame::none()
        .fill(COLOR_ACCENT.gamma_multiply(0.08))
        .rounding(12.0)
        .stroke(egui::Stroke::new(1.0, COLOR_ACCENT.gamma_multiply(0.4)))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Key Insight").strong().color(COLOR_ACCENT));
            ui.add_space(4.0);
            ui.label(egui::RichText::new(KEY_INSIGHT).small().color(COLOR_TEXT_DIM));
        });
}

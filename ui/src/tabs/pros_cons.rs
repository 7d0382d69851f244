use crate::theme::*;
use crate::widgets::tab_intro;
use eframe::egui;
use sdex_core::content::TRADE_OFFS;
use sdex_core::{Tab, TradeOff, TradeOffKind};

#[derive(Default)]
pub struct ProsConsPanel {
    pub revealed: [bool; 4],
}

pub fn render(ui: &mut egui::Ui, panel: &mut ProsConsPanel) {
    tab_intro(ui, Tab::ProsCons);

    ui.columns(2, |cols| {
        for (idx, card) in TRADE_OFFS.iter().enumerate() {
            let ui = &mut cols[idx % 2];
            flip_card(ui, card, &mut panel.revealed[idx]);
            ui.add_space(12.0);
        }
    });
}

/// Prompt on the front, answer on the back; a click flips it. Each card
/// flips independently of the others.
fn flip_card(ui: &mut egui::Ui, card: &TradeOff, revealed: &mut bool) {
    let accent = match card.kind {
        TradeOffKind::Pro => COLOR_SUCCESS,
        TradeOffKind::Con => COLOR_CRITICAL,
    };
    let (fill, stroke) = if *revealed {
        (COLOR_CARD, COLOR_ACCENT.gamma_multiply(0.5))
    } else {
        (COLOR_PANEL, COLOR_BORDER)
    };

    let response = egui::Frame::none()
        .fill(fill)
        .rounding(14.0)
        .stroke(egui::Stroke::new(1.5, stroke))
        .inner_margin(18.0)
        .show(ui, |ui| {
            ui.set_min_height(150.0);
            ui.vertical_centered(|ui| {
                if *revealed {
                    let tag = match card.kind {
                        TradeOffKind::Pro => "THE ADVANTAGE",
                        TradeOffKind::Con => "THE CHALLENGE",
                    };
                    ui.label(egui::RichText::new(tag).small().strong().color(accent));
                    ui.add_space(10.0);
                    ui.label(egui::RichText::new(card.answer).color(COLOR_TEXT));
                } else {
                    ui.label(egui::RichText::new(card.glyph).size(26.0));
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(card.title)
                            .strong()
                            .size(16.0)
                            .color(COLOR_TEXT),
                    );
                    ui.label(
                        egui::RichText::new(card.prompt)
                            .italics()
                            .small()
                            .color(COLOR_TEXT_DIM),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("CLICK TO REVEAL")
                            .small()
                            .color(COLOR_TEXT_DIM),
                    );
                }
            });
        })
        .response;

    if response.interact(egui::Sense::click()).clicked() {
        *revealed = !*revealed;
    }
}

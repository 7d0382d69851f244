use crate::theme::*;
use crate::widgets::{card_frame, tab_intro};
use eframe::egui;
use sdex_core::content::TIER_NOTES;
use sdex_core::{Tab, Tier};

pub struct TiersPanel {
    pub active: Tier,
}

impl Default for TiersPanel {
    fn default() -> Self {
        Self {
            active: Tier::Three,
        }
    }
}

pub fn render(ui: &mut egui::Ui, panel: &mut TiersPanel) {
    tab_intro(ui, Tab::Tiers);

    // Tier selector pills
    ui.horizontal(|ui| {
        let row_width = Tier::ALL.len() as f32 * 108.0;
        ui.add_space((ui.available_width() - row_width).max(0.0) / 2.0);
        for tier in Tier::ALL {
            let selected = tier == panel.active;
            let text = egui::RichText::new(tier.label()).strong().color(if selected {
                COLOR_BG
            } else {
                COLOR_TEXT_DIM
            });
            let button = egui::Button::new(text)
                .fill(if selected { COLOR_ACCENT } else { COLOR_CARD })
                .rounding(15.0)
                .min_size(egui::vec2(100.0, 30.0));
            if ui.add(button).clicked() {
                panel.active = tier;
                log::debug!("tiers: selected {:?}", tier);
            }
        }
    });

    ui.add_space(16.0);
    render_diagram(ui, panel.active);

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("\u{201c}{}\u{201d}", panel.active.description()))
                .italics()
                .color(COLOR_TEXT_DIM),
        );
    });

    ui.add_space(16.0);
    ui.columns(2, |cols| {
        for (idx, note) in TIER_NOTES.iter().enumerate() {
            card_frame().show(&mut cols[idx], |ui| {
                ui.label(egui::RichText::new(note.title).strong().color(COLOR_TEXT));
                ui.add_space(4.0);
                ui.label(egui::RichText::new(note.body).small().color(COLOR_TEXT_DIM));
            });
        }
    });
}

fn render_diagram(ui: &mut egui::Ui, tier: Tier) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 230.0),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    painter.rect_filled(rect, 16.0, COLOR_PANEL);
    painter.rect_stroke(rect, 16.0, egui::Stroke::new(1.0, COLOR_BORDER));

    let layers = tier.layers();
    match tier {
        Tier::One => {
            // A monolith: one box, everything stacked inside.
            let outer =
                egui::Rect::from_center_size(rect.center(), egui::vec2(210.0, 190.0));
            painter.rect_filled(outer, 14.0, COLOR_CARD);
            painter.rect_stroke(outer, 14.0, egui::Stroke::new(2.0, COLOR_BORDER));

            let step = 52.0;
            let top = outer.center().y - step;
            for (idx, layer) in layers.iter().enumerate() {
                let y = top + idx as f32 * step;
                painter.text(
                    egui::pos2(outer.center().x - 34.0, y),
                    egui::Align2::CENTER_CENTER,
                    layer.glyph,
                    egui::FontId::proportional(22.0),
                    COLOR_TEXT,
                );
                painter.text(
                    egui::pos2(outer.center().x + 20.0, y),
                    egui::Align2::CENTER_CENTER,
                    layer.name,
                    egui::FontId::proportional(12.0),
                    COLOR_TEXT_DIM,
                );
                if idx + 1 < layers.len() {
                    painter.line_segment(
                        [
                            egui::pos2(outer.left() + 24.0, y + step / 2.0),
                            egui::pos2(outer.right() - 24.0, y + step / 2.0),
                        ],
                        egui::Stroke::new(1.0, COLOR_BORDER),
                    );
                }
            }
            if let Some(caption) = tier.caption() {
                painter.text(
                    egui::pos2(outer.center().x, outer.bottom() + 18.0),
                    egui::Align2::CENTER_CENTER,
                    caption,
                    egui::FontId::proportional(11.0),
                    COLOR_TEXT_DIM,
                );
            }
        }
        _ => {
            // A row of boxes joined left to right.
            let count = layers.len();
            let box_size = egui::vec2(104.0, 104.0);
            let gap = 46.0;
            let total = count as f32 * box_size.x + (count - 1) as f32 * gap;
            let left = rect.center().x - total / 2.0 + box_size.x / 2.0;

            for (idx, layer) in layers.iter().enumerate() {
                let center = egui::pos2(left + idx as f32 * (box_size.x + gap), rect.center().y);
                let layer_rect = egui::Rect::from_center_size(center, box_size);
                painter.rect_filled(layer_rect, 12.0, COLOR_CARD);
                painter.rect_stroke(layer_rect, 12.0, egui::Stroke::new(2.0, COLOR_BORDER));
                painter.text(
                    center - egui::vec2(0.0, 10.0),
                    egui::Align2::CENTER_CENTER,
                    layer.glyph,
                    egui::FontId::proportional(26.0),
                    COLOR_TEXT,
                );
                painter.text(
                    egui::pos2(center.x, layer_rect.bottom() + 14.0),
                    egui::Align2::CENTER_CENTER,
                    layer.name.to_uppercase(),
                    egui::FontId::proportional(9.0),
                    COLOR_TEXT_DIM,
                );

                if idx + 1 < count {
                    let from = egui::pos2(layer_rect.right() + 6.0, center.y);
                    let to = egui::pos2(layer_rect.right() + gap - 6.0, center.y);
                    painter.line_segment([from, to], egui::Stroke::new(2.0, COLOR_BORDER));
                    painter.text(
                        egui::pos2(to.x, center.y),
                        egui::Align2::CENTER_CENTER,
                        "▸",
                        egui::FontId::proportional(14.0),
                        COLOR_BORDER,
                    );
                }
            }
        }
    }
}

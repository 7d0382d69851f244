use crate::theme::*;
use eframe::egui;
use sdex_core::{LoadSample, Tab};

/// Shared card chrome for content blocks.
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(COLOR_PANEL)
        .rounding(12.0)
        .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
        .inner_margin(16.0)
}

/// Small rounded pill used for badges and example chips.
pub fn chip(ui: &mut egui::Ui, text: &str, fg: egui::Color32, bg: egui::Color32) {
    egui::Frame::none()
        .fill(bg)
        .rounding(10.0)
        .inner_margin(egui::Margin::symmetric(8.0, 3.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(fg));
        });
}

/// Centered heading + intro paragraph every tab opens with.
pub fn tab_intro(ui: &mut egui::Ui, tab: Tab) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(tab.heading())
                .heading()
                .strong()
                .color(COLOR_TEXT),
        );
        ui.add_space(6.0);
        ui.label(egui::RichText::new(tab.intro()).color(COLOR_TEXT_DIM));
        ui.add_space(16.0);
    });
}

/// Horizontal utilization bar with threshold coloring.
pub struct GaugeWidget {
    load: u32,
    status: &'static str,
}

impl GaugeWidget {
    pub fn new(load: u32, status: &'static str) -> Self {
        Self { load, status }
    }
}

impl egui::Widget for GaugeWidget {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(ui.available_width(), 44.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            let bar = egui::Rect::from_min_size(rect.left_top(), egui::vec2(rect.width(), 14.0));
            painter.rect_filled(bar, 7.0, COLOR_CARD);

            let fill_color = if self.load > 80 {
                COLOR_CRITICAL
            } else if self.load > 50 {
                COLOR_WARN
            } else {
                COLOR_SUCCESS
            };
            let fill_w = bar.width() * (self.load as f32 / 100.0);
            if fill_w > 0.0 {
                painter.rect_filled(
                    egui::Rect::from_min_size(bar.left_top(), egui::vec2(fill_w, 14.0)),
                    7.0,
                    fill_color,
                );
            }

            let pct_color = if self.load > 80 {
                COLOR_CRITICAL
            } else {
                COLOR_TEXT_DIM
            };
            painter.text(
                rect.left_bottom() - egui::vec2(0.0, 2.0),
                egui::Align2::LEFT_BOTTOM,
                format!("{}% Load", self.load),
                egui::FontId::proportional(11.0),
                pct_color,
            );
            painter.text(
                rect.right_bottom() - egui::vec2(0.0, 2.0),
                egui::Align2::RIGHT_BOTTOM,
                self.status,
                egui::FontId::proportional(11.0),
                COLOR_TEXT_DIM,
            );
        }

        response
    }
}

/// Tiny area chart of recent gauge readings.
pub struct SparklineWidget<'a> {
    label: String,
    data: &'a [LoadSample],
    color: egui::Color32,
    current_value_text: String,
    height: f32,
}

impl<'a> SparklineWidget<'a> {
    pub fn new(
        label: &str,
        data: &'a [LoadSample],
        color: egui::Color32,
        value_text: String,
    ) -> Self {
        Self {
            label: label.to_string(),
            data,
            color,
            current_value_text: value_text,
            height: 46.0,
        }
    }
}

impl egui::Widget for SparklineWidget<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            painter.rect_filled(rect, 2.0, egui::Color32::from_black_alpha(40));
            painter.rect_stroke(rect, 2.0, egui::Stroke::new(1.0, COLOR_BORDER));

            // Top strip reserved for the labels
            let text_margin_y = 18.0;
            let graph_rect = egui::Rect::from_min_max(
                rect.left_top() + egui::vec2(0.0, text_margin_y),
                rect.right_bottom(),
            );

            if self.data.len() >= 2 {
                let points: Vec<egui::Pos2> = self
                    .data
                    .iter()
                    .enumerate()
                    .map(|(i, sample)| {
                        let x = graph_rect.left()
                            + (i as f32 / (self.data.len() - 1) as f32) * graph_rect.width();
                        let y = graph_rect.bottom()
                            - (sample.load as f32 / 100.0) * (graph_rect.height() * 0.85)
                            - 2.0;
                        egui::pos2(x, y)
                    })
                    .collect();

                // Area fill
                let mut shape_points = points.clone();
                shape_points.push(egui::pos2(graph_rect.right(), graph_rect.bottom()));
                shape_points.push(egui::pos2(graph_rect.left(), graph_rect.bottom()));
                painter.add(egui::Shape::convex_polygon(
                    shape_points,
                    self.color.gamma_multiply(0.15),
                    egui::Stroke::NONE,
                ));

                // Line
                painter.add(egui::Shape::line(
                    points,
                    egui::Stroke::new(1.5, self.color),
                ));
            } else {
                painter.text(
                    graph_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "SAMPLING...",
                    egui::FontId::proportional(10.0),
                    COLOR_TEXT_DIM,
                );
            }

            painter.text(
                rect.left_top() + egui::vec2(8.0, 4.0),
                egui::Align2::LEFT_TOP,
                &self.label,
                egui::FontId::proportional(10.0),
                COLOR_TEXT_DIM,
            );
            painter.text(
                rect.right_top() + egui::vec2(-8.0, 4.0),
                egui::Align2::RIGHT_TOP,
                &self.current_value_text,
                egui::FontId::proportional(13.0),
                self.color,
            );
        }

        response
    }
}

use crate::theme::*;
use crate::widgets::tab_intro;
use eframe::egui;
use sdex_core::{LifecycleSim, Phase, Tab};

#[derive(Default)]
pub struct LifecyclePanel {
    pub sim: LifecycleSim,
}

pub fn render(ui: &mut egui::Ui, panel: &mut LifecyclePanel) {
    tab_intro(ui, Tab::Lifecycle);

    let phase = panel.sim.phase();

    // The stage: client and server endpoints joined by the wire.
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 240.0),
        egui::Sense::hover(),
    );
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 16.0, COLOR_PANEL);
        painter.rect_stroke(rect, 16.0, egui::Stroke::new(1.0, COLOR_BORDER));

        let cy = rect.center().y;
        let box_size = egui::vec2(130.0, 120.0);
        let client_rect =
            egui::Rect::from_center_size(egui::pos2(rect.left() + 110.0, cy), box_size);
        let server_rect =
            egui::Rect::from_center_size(egui::pos2(rect.right() - 110.0, cy), box_size);

        // Client lights up once the payload is rendered.
        let client_done = phase == Phase::Rendered;
        painter.rect_filled(
            client_rect,
            12.0,
            if client_done {
                COLOR_SUCCESS.gamma_multiply(0.15)
            } else {
                COLOR_CARD
            },
        );
        painter.rect_stroke(
            client_rect,
            12.0,
            egui::Stroke::new(2.0, if client_done { COLOR_SUCCESS } else { COLOR_BORDER }),
        );
        painter.text(
            client_rect.center() - egui::vec2(0.0, 18.0),
            egui::Align2::CENTER_CENTER,
            "💻",
            egui::FontId::proportional(32.0),
            COLOR_TEXT,
        );
        painter.text(
            client_rect.center() + egui::vec2(0.0, 24.0),
            egui::Align2::CENTER_CENTER,
            "User Client",
            egui::FontId::proportional(12.0),
            COLOR_TEXT,
        );
        painter.text(
            client_rect.center() + egui::vec2(0.0, 40.0),
            egui::Align2::CENTER_CENTER,
            "Browser / App",
            egui::FontId::proportional(9.0),
            COLOR_TEXT_DIM,
        );

        // Server pulses while it works.
        let busy = phase == Phase::Processing;
        let pulse = (0.5 + 0.5 * (ui.input(|i| i.time) * 6.0).sin()) as f32;
        let server_border = if busy {
            COLOR_ACCENT.gamma_multiply(0.4 + 0.6 * pulse)
        } else {
            COLOR_BORDER
        };
        painter.rect_filled(
            server_rect,
            12.0,
            if busy {
                COLOR_ACCENT.gamma_multiply(0.12)
            } else {
                COLOR_CARD
            },
        );
        painter.rect_stroke(server_rect, 12.0, egui::Stroke::new(2.0, server_border));
        painter.text(
            server_rect.center() - egui::vec2(0.0, 18.0),
            egui::Align2::CENTER_CENTER,
            if busy { "⏳" } else { "🗄" },
            egui::FontId::proportional(32.0),
            COLOR_TEXT,
        );
        painter.text(
            server_rect.center() + egui::vec2(0.0, 24.0),
            egui::Align2::CENTER_CENTER,
            "Backend Server",
            egui::FontId::proportional(12.0),
            COLOR_TEXT,
        );
        painter.text(
            server_rect.center() + egui::vec2(0.0, 40.0),
            egui::Align2::CENTER_CENTER,
            "API / Logic",
            egui::FontId::proportional(9.0),
            COLOR_TEXT_DIM,
        );

        // The wire
        let start = egui::pos2(client_rect.right() + 16.0, cy);
        let end = egui::pos2(server_rect.left() - 16.0, cy);
        painter.line_segment([start, end], egui::Stroke::new(3.0, COLOR_CARD));

        // Moving indicator, only during the transit phases.
        if let Some(progress) = panel.sim.transit_progress() {
            let (from, to, color, tag) = if phase == Phase::Request {
                (start, end, COLOR_ACCENT, "GET /data")
            } else {
                (end, start, COLOR_SUCCESS, "200 OK")
            };
            let pos = from + (to - from) * progress;
            painter.circle_filled(pos, 7.0, color);
            painter.text(
                pos - egui::vec2(0.0, 18.0),
                egui::Align2::CENTER_CENTER,
                tag,
                egui::FontId::proportional(10.0),
                color,
            );
        }
    }

    // Status line
    ui.add_space(12.0);
    egui::Frame::none()
        .fill(COLOR_PANEL)
        .rounding(12.0)
        .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
        .inner_margin(18.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(phase.status_line()).color(COLOR_TEXT));
                if phase == Phase::Rendered {
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new("✔ Data successfully loaded!")
                            .strong()
                            .color(COLOR_SUCCESS),
                    );
                }
            });
        });

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        let ready = phase.accepts_start();
        let text = egui::RichText::new("📨 Send HTTP Request")
            .strong()
            .size(15.0)
            .color(if ready { COLOR_BG } else { COLOR_TEXT_DIM });
        let button = egui::Button::new(text)
            .fill(if ready { COLOR_ACCENT } else { COLOR_CARD })
            .rounding(21.0)
            .min_size(egui::vec2(230.0, 42.0));
        if ui.add_enabled(ready, button).clicked() {
            panel.sim.start();
            log::info!("lifecycle: round trip started");
        }
    });
}

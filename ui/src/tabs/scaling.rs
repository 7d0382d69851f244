use crate::theme::*;
use crate::widgets::{card_frame, tab_intro, GaugeWidget, SparklineWidget};
use eframe::egui;
use sdex_core::{LoadHistory, ScalingSim, ServerTarget, Tab, TrafficLevel};

pub struct ScalingPanel {
    pub sim: ScalingSim,
    pub history: LoadHistory,
}

impl Default for ScalingPanel {
    fn default() -> Self {
        Self {
            sim: ScalingSim::new(),
            history: LoadHistory::new(120),
        }
    }
}

pub fn render(ui: &mut egui::Ui, panel: &mut ScalingPanel) {
    tab_intro(ui, Tab::Scaling);

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.set_width(280.0);
            render_controls(ui, panel);
        });
        ui.add_space(12.0);
        ui.vertical(|ui| {
            render_canvas(ui, panel);
        });
    });
}

fn render_controls(ui: &mut egui::Ui, panel: &mut ScalingPanel) {
    let infra = panel.sim.infrastructure();

    card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("⚡ Traffic Simulator")
                .strong()
                .color(COLOR_TEXT),
        );
        ui.add_space(8.0);

        let spiking = infra.traffic == TrafficLevel::High;
        if toggle_button(
            ui,
            spiking,
            "High Traffic (Spike!)",
            "Normal Traffic",
            COLOR_CRITICAL,
        ) {
            panel.sim.toggle_traffic();
            log::info!("scaling: traffic -> {:?}", panel.sim.infrastructure().traffic);
        }
        ui.add_space(6.0);

        if toggle_button(
            ui,
            infra.balanced,
            "Load Balancer Active",
            "Add Load Balancer",
            COLOR_ACCENT,
        ) {
            panel.sim.set_balanced(!infra.balanced);
            log::info!("scaling: balancer -> {}", !infra.balanced);
        }
        ui.add_space(6.0);

        if toggle_button(
            ui,
            infra.caching,
            "Caching Enabled",
            "Enable Caching",
            COLOR_SUCCESS,
        ) {
            panel.sim.set_caching(!infra.caching);
            log::info!("scaling: caching -> {}", !infra.caching);
        }
    });

    ui.add_space(12.0);
    card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("SERVER CPU LOAD")
                .small()
                .strong()
                .color(COLOR_TEXT_DIM),
        );
        ui.add_space(8.0);
        let load = panel.sim.load();
        ui.add(GaugeWidget::new(load, panel.sim.health_label()));
        ui.add_space(8.0);
        let history = panel.history.history.as_slices().0;
        ui.add(SparklineWidget::new(
            "LOAD HISTORY",
            history,
            COLOR_ACCENT,
            format!("{}%", load),
        ));
    });
}

fn toggle_button(
    ui: &mut egui::Ui,
    active: bool,
    label_on: &str,
    label_off: &str,
    color: egui::Color32,
) -> bool {
    let label = if active { label_on } else { label_off };
    let (fill, text_color) = if active {
        (color.gamma_multiply(0.2), color)
    } else {
        (COLOR_CARD, COLOR_TEXT_DIM)
    };
    ui.add_sized(
        [ui.available_width(), 36.0],
        egui::Button::new(egui::RichText::new(label).strong().color(text_color))
            .fill(fill)
            .rounding(10.0),
    )
    .clicked()
}

fn render_canvas(ui: &mut egui::Ui, panel: &mut ScalingPanel) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 400.0),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    painter.rect_filled(rect, 16.0, egui::Color32::from_black_alpha(60));
    painter.rect_stroke(rect, 16.0, egui::Stroke::new(1.0, COLOR_BORDER));

    let infra = panel.sim.infrastructure();
    let load = panel.sim.load();
    let cy = rect.center().y;

    let users = egui::pos2(rect.left() + 80.0, cy);
    let balancer = egui::pos2(rect.center().x, cy);
    let server_a = egui::pos2(
        rect.right() - 100.0,
        if infra.balanced { cy - 70.0 } else { cy },
    );
    let server_b = egui::pos2(rect.right() - 100.0, cy + 70.0);

    node_box(painter, users, "👥", "USERS", COLOR_BORDER, COLOR_TEXT_DIM);

    if infra.balanced {
        painter.circle_filled(balancer, 34.0, COLOR_ACCENT.gamma_multiply(0.12));
        painter.circle_stroke(balancer, 34.0, egui::Stroke::new(2.0, COLOR_ACCENT));
        painter.text(
            balancer,
            egui::Align2::CENTER_CENTER,
            "🛡",
            egui::FontId::proportional(26.0),
            COLOR_ACCENT,
        );
        painter.text(
            balancer + egui::vec2(0.0, 50.0),
            egui::Align2::CENTER_CENTER,
            "LOAD BALANCER",
            egui::FontId::proportional(9.0),
            COLOR_ACCENT,
        );
    }

    // A lone server at breaking point rattles in place.
    let failing = load > 85 && !infra.balanced;
    let shake = if failing {
        (ui.input(|i| i.time) * 40.0).sin() as f32 * 3.0
    } else {
        0.0
    };
    node_box(
        painter,
        server_a + egui::vec2(shake, 0.0),
        "🗄",
        "SERVER A",
        if failing { COLOR_CRITICAL } else { COLOR_BORDER },
        COLOR_TEXT_DIM,
    );
    if infra.balanced {
        node_box(painter, server_b, "🗄", "SERVER B", COLOR_BORDER, COLOR_TEXT_DIM);
    }

    // Packets interpolate along their route by age.
    let now = panel.sim.now_ms();
    for packet in panel.sim.packets() {
        let t = packet.progress(now);
        let color = if packet.cached { COLOR_SUCCESS } else { COLOR_ACCENT };
        let dest = match packet.target {
            ServerTarget::A => server_a,
            ServerTarget::B => server_b,
        };
        let pos = if packet.via_balancer {
            if t < 0.5 {
                users + (balancer - users) * (t * 2.0)
            } else {
                balancer + (dest - balancer) * ((t - 0.5) * 2.0)
            }
        } else {
            users + (dest - users) * t
        };
        // Fade in and out at the ends of the flight.
        let alpha = (t * 10.0).min((1.0 - t) * 10.0).clamp(0.0, 1.0);
        painter.circle_filled(pos, 5.0, color.gamma_multiply(alpha));
    }

    if infra.caching {
        let pill = egui::Rect::from_center_size(
            egui::pos2(rect.center().x, rect.top() + 24.0),
            egui::vec2(210.0, 26.0),
        );
        painter.rect_filled(pill, 13.0, COLOR_SUCCESS.gamma_multiply(0.15));
        painter.rect_stroke(pill, 13.0, egui::Stroke::new(1.0, COLOR_SUCCESS.gamma_multiply(0.5)));
        painter.text(
            pill.center(),
            egui::Align2::CENTER_CENTER,
            "⚡ CACHING LAYER ACTIVE",
            egui::FontId::proportional(10.0),
            COLOR_SUCCESS,
        );
    }
}

fn node_box(
    painter: &egui::Painter,
    center: egui::Pos2,
    glyph: &str,
    caption: &str,
    border: egui::Color32,
    caption_color: egui::Color32,
) {
    let rect = egui::Rect::from_center_size(center, egui::vec2(74.0, 74.0));
    painter.rect_filled(rect, 12.0, COLOR_CARD);
    painter.rect_stroke(rect, 12.0, egui::Stroke::new(2.0, border));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(28.0),
        COLOR_TEXT,
    );
    painter.text(
        rect.center_bottom() + egui::vec2(0.0, 14.0),
        egui::Align2::CENTER_CENTER,
        caption,
        egui::FontId::proportional(9.0),
        caption_color,
    );
}

use crate::tabs;
use crate::theme::*;
use crate::widgets::chip;
use eframe::egui;
use sdex_core::Tab;
use serde::{Deserialize, Serialize};

pub struct ExplorerApp {
    pub active_tab: Tab,
    pub basics: tabs::basics::BasicsPanel,
    pub lifecycle: tabs::lifecycle::LifecyclePanel,
    pub tiers: tabs::tiers::TiersPanel,
    pub scaling: tabs::scaling::ScalingPanel,
    pub pros_cons: tabs::pros_cons::ProsConsPanel,
    pub examples: tabs::examples::ExamplesPanel,
    pub last_frame_time: f64,
    clock_carry: f64,
}

impl Default for ExplorerApp {
    fn default() -> Self {
        Self {
            active_tab: Tab::Basics,
            basics: Default::default(),
            lifecycle: Default::default(),
            tiers: Default::default(),
            scaling: Default::default(),
            pros_cons: Default::default(),
            examples: Default::default(),
            last_frame_time: 0.0,
            clock_carry: 0.0,
        }
    }
}

impl ExplorerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut app = Self::default();
        if let Some(storage) = cc.storage {
            if let Some(state) = eframe::get_value::<PersistedState>(storage, eframe::APP_KEY) {
                app.active_tab = state.active_tab;
            }
        }
        log::info!("starting on the {:?} tab", app.active_tab);
        app
    }

    /// Switch tabs. The departing panel is torn down entirely: its timers
    /// and selections do not survive navigation away.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        match self.active_tab {
            Tab::Basics => self.basics = Default::default(),
            Tab::Lifecycle => self.lifecycle = Default::default(),
            Tab::Tiers => self.tiers = Default::default(),
            Tab::Scaling => self.scaling = Default::default(),
            Tab::ProsCons => self.pros_cons = Default::default(),
            Tab::Examples => self.examples = Default::default(),
        }
        log::debug!("tab: {:?} -> {:?}", self.active_tab, tab);
        self.active_tab = tab;
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("System Design")
                            .heading()
                            .strong()
                            .color(COLOR_TEXT),
                    );
                    ui.label(
                        egui::RichText::new("Explorer")
                            .heading()
                            .strong()
                            .color(COLOR_ACCENT),
                    );
                });
                ui.label(
                    egui::RichText::new("Interactive guide to client-server architecture")
                        .small()
                        .color(COLOR_TEXT_DIM),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                chip(ui, "Education Mode", COLOR_ACCENT, COLOR_ACCENT.gamma_multiply(0.15));
                ui.add_space(6.0);
                chip(ui, "v1.0.0 Stable", COLOR_TEXT_DIM, COLOR_PANEL);
            });
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                let selected = tab == self.active_tab;
                let text = egui::RichText::new(tab.label()).strong().color(if selected {
                    COLOR_ACCENT
                } else {
                    COLOR_TEXT_DIM
                });
                let button = egui::Button::new(text)
                    .fill(if selected { COLOR_CARD } else { COLOR_PANEL })
                    .rounding(8.0);
                if ui.add(button).clicked() {
                    self.select_tab(tab);
                }
            }
        });
    }
}

#[derive(Serialize, Deserialize)]
pub struct PersistedState {
    pub active_tab: Tab,
}

impl eframe::App for ExplorerApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let state = PersistedState {
            active_tab: self.active_tab,
        };
        eframe::set_value(storage, eframe::APP_KEY, &state);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let current_real_time = ctx.input(|i| i.time);
        let dt = (current_real_time - self.last_frame_time).max(0.0);
        self.last_frame_time = current_real_time;

        // Whole milliseconds go to the active simulator; the fraction is
        // carried so the virtual clock does not drift behind real time.
        self.clock_carry += dt * 1_000.0;
        let dt_ms = self.clock_carry as u64;
        self.clock_carry -= dt_ms as f64;

        match self.active_tab {
            Tab::Lifecycle => {
                self.lifecycle.sim.advance(dt_ms);
                if self.lifecycle.sim.phase().duration_ms().is_some() {
                    ctx.request_repaint();
                }
            }
            Tab::Scaling => {
                self.scaling.sim.advance(dt_ms);
                let load = self.scaling.sim.load();
                let now_ms = self.scaling.sim.now_ms();
                self.scaling.history.update(now_ms, load);
                ctx.request_repaint();
            }
            _ => {}
        }

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none().fill(COLOR_BG).inner_margin(egui::Margin {
                    left: 24.0,
                    right: 24.0,
                    top: 18.0,
                    bottom: 12.0,
                }),
            )
            .show(ctx, |ui| self.render_header(ui));

        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::none().fill(COLOR_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("© 2024 System Design Academy")
                            .small()
                            .color(COLOR_TEXT_DIM),
                    );
                    ui.add_space(16.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .small()
                            .color(COLOR_TEXT_DIM),
                    );
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(COLOR_BG).inner_margin(24.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| match self.active_tab {
                    Tab::Basics => tabs::basics::render(ui, &mut self.basics),
                    Tab::Lifecycle => tabs::lifecycle::render(ui, &mut self.lifecycle),
                    Tab::Tiers => tabs::tiers::render(ui, &mut self.tiers),
                    Tab::Scaling => tabs::scaling::render(ui, &mut self.scaling),
                    Tab::ProsCons => tabs::pros_cons::render(ui, &mut self.pros_cons),
                    Tab::Examples => tabs::examples::render(ui, &mut self.examples),
                });
            });
    }
}

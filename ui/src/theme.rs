use eframe::egui;

pub const COLOR_BG: egui::Color32 = egui::Color32::from_rgb(2, 6, 23);
pub const COLOR_PANEL: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const COLOR_CARD: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
pub const COLOR_BORDER: egui::Color32 = egui::Color32::from_rgb(51, 65, 85);
pub const COLOR_ACCENT: egui::Color32 = egui::Color32::from_rgb(34, 211, 238);
pub const COLOR_TEXT: egui::Color32 = egui::Color32::from_rgb(241, 245, 249);
pub const COLOR_TEXT_DIM: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const COLOR_SUCCESS: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
pub const COLOR_WARN: egui::Color32 = egui::Color32::from_rgb(234, 179, 8);
pub const COLOR_CRITICAL: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

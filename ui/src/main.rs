mod app;
mod tabs;
mod theme;
mod widgets;

use app::ExplorerApp;
use egui::ViewportBuilder;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1180.0, 860.0])
            .with_title("System Design Explorer"),
        ..Default::default()
    };
    eframe::run_native(
        "System Design Explorer",
        options,
        Box::new(|cc| Ok(Box::new(ExplorerApp::new(cc)))),
    )
}

mod app;
mod ui;

use std::path::PathBuf;

use app::PurescopeApp;
use eframe::egui;
use purescope::config::AnalysisConfig;
use purescope::state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset to open on start-up.
    let mut state = AppState::new(AnalysisConfig::default());
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        ui::panels::load_into(&mut state, &path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Purescope – Pure Region Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(PurescopeApp::new(state)))),
    )
}

use eframe::egui;

use purescope::state::AppState;

use crate::ui::{View, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PurescopeApp {
    pub state: AppState,
    pub view: View,
}

impl PurescopeApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            view: View::default(),
        }
    }
}

impl eframe::App for PurescopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &mut self.view);
        });

        // ---- Bottom panel: visible-case summary ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Left side panel: threshold and regions ----
        egui::SidePanel::left("analysis_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: grid or plot ----
        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Table => table::data_table(ui, &self.state),
            View::ParallelCoordinates => plot::parallel_coordinates(ui, &self.state),
        });
    }
}

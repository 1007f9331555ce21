use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use purescope::data::loader;
use purescope::state::AppState;

use super::{View, to_color32};

// ---------------------------------------------------------------------------
// Left side panel – threshold, toggles, region list
// ---------------------------------------------------------------------------

/// Render the left analysis panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Pure regions");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // ---- Threshold ----
    let mut threshold = state.threshold;
    let slider = egui::Slider::new(&mut threshold, 0.0..=100.0)
        .step_by(1.0)
        .suffix("%")
        .text("Threshold");
    if ui.add(slider).changed() {
        state.set_threshold(threshold);
    }

    ui.horizontal(|ui: &mut Ui| {
        let toggle_label = if state.hide_easy_cases {
            "Show easy cases"
        } else {
            "Hide easy cases"
        };
        if ui.button(toggle_label).clicked() {
            state.toggle_easy_cases();
        }
        if ui.button("Best threshold").clicked() {
            match state.apply_best_threshold() {
                Ok(t) => log::info!("threshold set to {t}%"),
                Err(e) => state.status_message = Some(e.to_string()),
            }
        }
    });
    ui.checkbox(&mut state.normalize, "Normalize plot axes");

    ui.label(format!(
        "{} easy cases, {} hard cases",
        state.hidden_rows.len(),
        state.hard_case_count()
    ));
    ui.separator();

    // ---- Class legend ----
    ui.strong("Classes");
    for (class, color) in state.class_colors.legend_entries() {
        ui.label(RichText::new(class).color(to_color32(color)));
    }
    ui.separator();

    // ---- Region list ----
    ui.strong(format!("{} significant regions", state.regions.len()));
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for region in &state.regions {
                let color = to_color32(state.class_colors.color_for(&region.dominant_class));
                ui.label(RichText::new(region.to_string()).color(color));
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, view: &mut View) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Close").clicked() {
                state.clear();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(view, View::Table, "Table");
        ui.selectable_value(view, View::ParallelCoordinates, "Parallel Coordinates");

        ui.separator();

        if let (Some(ds), Some(name)) = (&state.dataset, &state.dataset_name) {
            ui.label(format!("{name}: {} cases, {} attributes", ds.len(), ds.column_names.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

/// Render the bottom status line.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_some() {
        ui.label(state.visibility_summary());
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open labeled dataset")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, &path);
    }
}

/// Load `path` into the session, reporting failures in the status line.
pub fn load_into(state: &mut AppState, path: &Path) {
    match loader::load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} rows with columns {:?}",
                dataset.len(),
                dataset.column_names
            );
            state.set_dataset(dataset, loader::dataset_name(path));
        }
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

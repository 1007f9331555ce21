use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use purescope::state::AppState;

use super::to_color32;

// ---------------------------------------------------------------------------
// Data grid (central panel)
// ---------------------------------------------------------------------------

/// Render the visible rows. Easy cases are dimmed when they are shown.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to explore it  (File → Open…)");
        });
        return;
    };

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .column(Column::auto().at_least(40.0))
            .columns(Column::auto().at_least(60.0), dataset.column_names.len())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                for name in &dataset.column_names {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, state.visible_indices.len(), |mut row| {
                    let idx = state.visible_indices[row.index()];
                    let easy = state.hidden_rows.contains(&idx);
                    row.col(|ui| {
                        ui.label(idx.to_string());
                    });
                    for col in 0..dataset.column_names.len() {
                        let value = dataset.value(idx, col);
                        row.col(|ui| {
                            let mut text = RichText::new(value.to_string());
                            if state.class_column == Some(col) {
                                let color = state.class_colors.color_for(&value.label());
                                text = text.color(to_color32(color));
                            }
                            if easy {
                                text = text.weak();
                            }
                            ui.label(text);
                        });
                    }
                });
            });
    });
}

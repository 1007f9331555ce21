use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Text};
use purescope::data::column::{NumericColumn, feature_columns};
use purescope::data::transform::min_max;
use purescope::state::AppState;

use super::to_color32;

// ---------------------------------------------------------------------------
// Parallel coordinates with pure-region overlay (central panel)
// ---------------------------------------------------------------------------

/// One vertical axis per fully numeric attribute, one polyline per visible
/// row, and a thick bar per significant region on its attribute's axis.
pub fn parallel_coordinates(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to plot it  (File → Open…)");
        });
        return;
    };
    let Some(class_column) = state.class_column else {
        ui.label("No class column: nothing to plot.");
        return;
    };

    let axes: Vec<NumericColumn> = feature_columns(dataset, class_column)
        .into_iter()
        .filter(NumericColumn::is_fully_numeric)
        .collect();
    if axes.is_empty() {
        ui.label("No fully numeric attributes to plot.");
        return;
    }

    let ranges: Vec<(f64, f64)> = axes
        .iter()
        .map(|c| c.range().unwrap_or((0.0, 1.0)))
        .collect();
    let scale = |axis: usize, v: f64| {
        if state.normalize {
            min_max(v, ranges[axis])
        } else {
            v
        }
    };
    let axis_extent = |axis: usize| {
        if state.normalize {
            (0.0, 1.0)
        } else {
            ranges[axis]
        }
    };
    let label_y = (0..axes.len())
        .map(|a| axis_extent(a).0)
        .fold(f64::INFINITY, f64::min);
    let labels = dataset.labels(class_column);

    Plot::new("parallel_coordinates")
        .legend(Legend::default())
        .y_axis_label(if state.normalize { "Scaled value" } else { "Value" })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (axis, column) in axes.iter().enumerate() {
                let x = axis as f64;
                let (lo, hi) = axis_extent(axis);
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[x, lo], [x, hi]]))
                        .color(Color32::DARK_GRAY)
                        .width(1.0),
                );
                plot_ui.text(Text::new(PlotPoint::new(x, label_y), column.name.as_str()));
            }

            for &row in &state.visible_indices {
                let points: PlotPoints = axes
                    .iter()
                    .enumerate()
                    .filter_map(|(axis, c)| c.values[row].map(|v| [axis as f64, scale(axis, v)]))
                    .collect();
                let class = &labels[row];
                let line = Line::new(points)
                    .name(class)
                    .color(to_color32(state.class_colors.color_for(class)))
                    .width(1.0);
                plot_ui.line(line);
            }

            for region in &state.regions {
                let Some(axis) = axes.iter().position(|c| c.name == region.attribute) else {
                    continue;
                };
                let x = axis as f64;
                let bar = vec![[x, scale(axis, region.start)], [x, scale(axis, region.end)]];
                plot_ui.line(
                    Line::new(PlotPoints::from(bar))
                        .color(to_color32(state.class_colors.color_for(&region.dominant_class)))
                        .width(6.0),
                );
            }
        });
}

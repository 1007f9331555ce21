use serde::Serialize;

use crate::data::model::TabularDataset;

use super::classifier::RowClassifier;
use super::filter::{dominant_regions, filter_significant};
use super::finder::find_regions_at;
use super::region::PureRegion;

pub const MIN_THRESHOLD: f64 = 0.0;
pub const MAX_THRESHOLD: f64 = 100.0;

/// Clamp a threshold percentage into `[0, 100]`; NaN becomes 0.
pub fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        log::warn!("threshold is NaN, using {MIN_THRESHOLD}");
        return MIN_THRESHOLD;
    }
    if !(MIN_THRESHOLD..=MAX_THRESHOLD).contains(&threshold) {
        log::warn!("threshold {threshold} outside [0, 100], clamping");
    }
    threshold.clamp(MIN_THRESHOLD, MAX_THRESHOLD)
}

/// Result of the best-threshold sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdChoice {
    pub threshold: f64,
    pub visible_rows: usize,
}

/// Rows still visible after hiding the easy cases at `threshold`.
pub fn visible_row_count(dataset: &TabularDataset, class_column: usize, threshold: f64) -> usize {
    let regions = filter_significant(find_regions_at(dataset, class_column), threshold);
    RowClassifier::new(dataset, class_column).remaining(&regions)
}

/// Sweep integer thresholds 0..=100 and pick the one leaving the fewest
/// visible rows; the smallest threshold wins ties.
pub fn best_threshold(dataset: &TabularDataset, class_column: usize) -> ThresholdChoice {
    let raw = find_regions_at(dataset, class_column);
    sweep(dataset, class_column, dominant_regions(raw))
}

/// Dominance does not depend on the threshold, so the sweep runs it once and
/// only re-applies the coverage cut per step.
fn sweep(dataset: &TabularDataset, class_column: usize, dominant: Vec<PureRegion>) -> ThresholdChoice {
    let mut classifier = RowClassifier::new(dataset, class_column);
    let mut best = ThresholdChoice {
        threshold: MIN_THRESHOLD,
        visible_rows: usize::MAX,
    };

    for step in 0..=100u32 {
        let threshold = f64::from(step);
        let significant: Vec<PureRegion> = dominant
            .iter()
            .filter(|r| r.is_significant(threshold))
            .cloned()
            .collect();
        let visible_rows = classifier.remaining(&significant);
        if visible_rows < best.visible_rows {
            best = ThresholdChoice {
                threshold,
                visible_rows,
            };
        }
    }

    log::info!(
        "best threshold {}% leaves {} of {} rows visible",
        best.threshold,
        best.visible_rows,
        dataset.len()
    );
    best
}

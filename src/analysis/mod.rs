//! Pure-region engine: finder, dominance/threshold filter, row classifier.
//!
//! ```text
//!  TabularDataset ──► finder ──► raw regions ──► filter ──► significant
//!                                                              │
//!                                  hidden rows ◄── classifier ◄┘
//! ```
//!
//! Every function here is stateless; the session in [`crate::state`] holds
//! the derived results.

use std::collections::BTreeSet;

use crate::data::model::TabularDataset;

pub mod classifier;
pub mod errors;
pub mod filter;
pub mod finder;
pub mod region;
pub mod threshold;

#[cfg(test)]
pub(crate) mod test_support;

pub use classifier::{RowClassifier, classify_rows};
pub use errors::{AnalysisError, AnalysisResult};
pub use filter::{dominant_regions, filter_significant};
pub use finder::{find_regions, find_regions_at};
pub use region::PureRegion;
pub use threshold::{ThresholdChoice, best_threshold, clamp_threshold, visible_row_count};

/// Output of one full pass at a fixed threshold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub regions: Vec<PureRegion>,
    pub hidden_rows: BTreeSet<usize>,
}

/// Locate the class column: the configured name if any, else `class`.
pub fn resolve_class_column(
    dataset: &TabularDataset,
    configured: Option<&str>,
) -> AnalysisResult<usize> {
    match configured {
        Some(name) => dataset
            .column_index(name)
            .ok_or_else(|| AnalysisError::UnknownColumn(name.to_string())),
        None => dataset
            .class_column_index()
            .ok_or(AnalysisError::NoClassColumn),
    }
}

/// Find, filter and classify in one pass.
pub fn analyze(dataset: &TabularDataset, class_column: usize, threshold: f64) -> Analysis {
    let raw = find_regions_at(dataset, class_column);
    let raw_count = raw.len();
    let regions = filter_significant(raw, threshold);
    let hidden_rows = classify_rows(dataset, &regions, class_column);
    log::info!(
        "{raw_count} pure windows, {} significant at {threshold}%, {} of {} rows easy",
        regions.len(),
        hidden_rows.len(),
        dataset.len()
    );
    Analysis {
        regions,
        hidden_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::{dataset, four_rows};

    #[test]
    fn test_resolve_class_column() {
        let ds = dataset(&["x", "Label", "CLASS"], &[&["1", "a", "b"]]);
        assert_eq!(resolve_class_column(&ds, None), Ok(2));
        assert_eq!(resolve_class_column(&ds, Some("label")), Ok(1));
        assert_eq!(
            resolve_class_column(&ds, Some("kind")),
            Err(AnalysisError::UnknownColumn("kind".to_string()))
        );
    }

    #[test]
    fn test_missing_class_column() {
        let ds = dataset(&["x", "y"], &[&["1", "2"]]);
        assert_eq!(resolve_class_column(&ds, None), Err(AnalysisError::NoClassColumn));
    }

    #[test]
    fn test_analyze_four_rows() {
        let analysis = analyze(&four_rows(), 1, 80.0);
        assert_eq!(analysis.regions.len(), 2);
        assert_eq!(analysis.hidden_rows.len(), 4);
    }

    #[test]
    fn test_analyze_empty_dataset() {
        let ds = dataset(&["x", "class"], &[]);
        assert_eq!(analyze(&ds, 1, 5.0), Analysis::default());
    }
}

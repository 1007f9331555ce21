use std::collections::HashMap;

use crate::data::column::{NumericColumn, feature_columns};
use crate::data::model::TabularDataset;

use super::errors::{AnalysisError, AnalysisResult};
use super::region::PureRegion;

// ---------------------------------------------------------------------------
// Class tallies shared by every attribute of one pass
// ---------------------------------------------------------------------------

/// Row labels plus per-class row counts of the whole dataset.
struct ClassTally<'a> {
    labels: &'a [String],
    counts: HashMap<&'a str, usize>,
    total_rows: usize,
}

impl<'a> ClassTally<'a> {
    fn new(labels: &'a [String]) -> Self {
        let mut counts = HashMap::new();
        for label in labels {
            *counts.entry(label.as_str()).or_insert(0) += 1;
        }
        ClassTally {
            labels,
            counts,
            total_rows: labels.len(),
        }
    }

    fn label(&self, row: usize) -> &'a str {
        &self.labels[row]
    }

    /// `(percent of class, percent of dataset)` for `count` rows of `class`.
    fn coverage(&self, class: &str, count: usize) -> (f64, f64) {
        let of_class = self.counts.get(class).copied().unwrap_or(0);
        let pct = |n: usize| {
            if n == 0 {
                0.0
            } else {
                count as f64 / n as f64 * 100.0
            }
        };
        (pct(of_class), pct(self.total_rows))
    }
}

// ---------------------------------------------------------------------------
// Sorted distinct values with their rows
// ---------------------------------------------------------------------------

/// All rows holding one distinct value; they enter a window together.
#[derive(Debug)]
struct ValueGroup {
    value: f64,
    rows: Vec<usize>,
}

fn value_groups(column: &NumericColumn) -> Vec<ValueGroup> {
    let mut pairs: Vec<(f64, usize)> = column
        .values
        .iter()
        .enumerate()
        .filter_map(|(row, v)| v.map(|v| (v, row)))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut groups: Vec<ValueGroup> = Vec::new();
    for (value, row) in pairs {
        match groups.last_mut() {
            // `==` also merges -0.0 with 0.0, which total_cmp keeps adjacent.
            Some(group) if group.value == value => group.rows.push(row),
            _ => groups.push(ValueGroup {
                value,
                rows: vec![row],
            }),
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Finder
// ---------------------------------------------------------------------------

/// Find every pure window of every attribute, unfiltered.
///
/// `class_column` names the label column; it is resolved exactly first and
/// then case-insensitively.
pub fn find_regions(dataset: &TabularDataset, class_column: &str) -> AnalysisResult<Vec<PureRegion>> {
    let idx = dataset
        .column_index(class_column)
        .ok_or_else(|| AnalysisError::UnknownColumn(class_column.to_string()))?;
    Ok(find_regions_at(dataset, idx))
}

/// [`find_regions`] with an already resolved class column index.
///
/// For each attribute other than the class column, every distinct value
/// starts a window that grows one distinct value at a time. The first row
/// fixes the class; the first row of another class ends that start. Each
/// pure step emits a region, so a pure start yields its whole growing
/// sequence of windows, not only the largest.
pub fn find_regions_at(dataset: &TabularDataset, class_column: usize) -> Vec<PureRegion> {
    if dataset.is_empty() {
        return Vec::new();
    }
    let labels = dataset.labels(class_column);
    let tally = ClassTally::new(&labels);

    let mut regions = Vec::new();
    for column in feature_columns(dataset, class_column) {
        let groups = value_groups(&column);
        let before = regions.len();
        for start in 0..groups.len() {
            grow_from(&column.name, &groups, start, &tally, &mut regions);
        }
        log::debug!(
            "attribute {}: {} distinct values, {} pure windows",
            column.name,
            groups.len(),
            regions.len() - before
        );
    }
    regions
}

fn grow_from(
    attribute: &str,
    groups: &[ValueGroup],
    start: usize,
    tally: &ClassTally<'_>,
    out: &mut Vec<PureRegion>,
) {
    let start_value = groups[start].value;
    let mut class: Option<&str> = None;
    let mut row_count = 0;

    for group in &groups[start..] {
        let current = *class.get_or_insert_with(|| tally.label(group.rows[0]));
        if group.rows.iter().any(|&row| tally.label(row) != current) {
            return;
        }
        row_count += group.rows.len();

        let (coverage_of_class, coverage_of_dataset) = tally.coverage(current, row_count);
        out.push(PureRegion {
            attribute: attribute.to_string(),
            start: start_value,
            end: group.value,
            dominant_class: current.to_string(),
            row_count,
            coverage_of_class,
            coverage_of_dataset,
        });
    }
}

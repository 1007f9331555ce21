use std::collections::{BTreeSet, HashMap};

use crate::data::column::NumericColumn;
use crate::data::model::TabularDataset;

use super::region::PureRegion;

/// Maps regions back onto rows. Labels and parsed columns are cached, so one
/// classifier can serve many region sets over the same dataset.
pub struct RowClassifier<'a> {
    dataset: &'a TabularDataset,
    labels: Vec<String>,
    columns: HashMap<usize, NumericColumn>,
}

impl<'a> RowClassifier<'a> {
    pub fn new(dataset: &'a TabularDataset, class_column: usize) -> Self {
        RowClassifier {
            dataset,
            labels: dataset.labels(class_column),
            columns: HashMap::new(),
        }
    }

    /// Rows covered by at least one region: the row's value on the region's
    /// attribute lies in `[start, end]` and its label is the region's class.
    pub fn easy_rows(&mut self, regions: &[PureRegion]) -> BTreeSet<usize> {
        let mut hidden = BTreeSet::new();
        for region in regions {
            let Some(idx) = self.dataset.column_index(&region.attribute) else {
                log::warn!("region on unknown attribute {}", region.attribute);
                continue;
            };
            let dataset = self.dataset;
            let column = self
                .columns
                .entry(idx)
                .or_insert_with(|| NumericColumn::from_dataset(dataset, idx));

            for (row, value) in column.values.iter().enumerate() {
                let Some(value) = *value else { continue };
                if region.contains_value(value) && self.labels[row] == region.dominant_class {
                    hidden.insert(row);
                }
            }
        }
        hidden
    }

    /// Rows left visible once `regions` hide their easy cases.
    pub fn remaining(&mut self, regions: &[PureRegion]) -> usize {
        self.dataset.len() - self.easy_rows(regions).len()
    }
}

/// The "easy" rows for `significant_regions`; every other row is a hard case.
pub fn classify_rows(
    dataset: &TabularDataset,
    significant_regions: &[PureRegion],
    class_column: usize,
) -> BTreeSet<usize> {
    RowClassifier::new(dataset, class_column).easy_rows(significant_regions)
}

use super::model::TabularDataset;

// ---------------------------------------------------------------------------
// NumericColumn – parsed once per analysis pass
// ---------------------------------------------------------------------------

/// One column read as numbers. `values[row]` is `None` when the cell does not
/// read as a finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl NumericColumn {
    /// Parse column `index` of the dataset.
    pub fn from_dataset(dataset: &TabularDataset, index: usize) -> Self {
        let values = dataset
            .rows
            .iter()
            .map(|row| row.get(index).as_f64())
            .collect();
        NumericColumn {
            name: dataset.column_names[index].clone(),
            values,
        }
    }

    /// Every row has a numeric value (and there is at least one row).
    pub fn is_fully_numeric(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(Option::is_some)
    }

    /// `(min, max)` over the numeric cells.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.values.iter().flatten().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

/// Numeric caches for every column except `class_column`.
pub fn feature_columns(dataset: &TabularDataset, class_column: usize) -> Vec<NumericColumn> {
    (0..dataset.column_names.len())
        .filter(|&idx| idx != class_column)
        .map(|idx| NumericColumn::from_dataset(dataset, idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Row};

    fn dataset() -> TabularDataset {
        TabularDataset::from_rows(
            vec!["x".into(), "note".into(), "class".into()],
            vec![
                Row::new(vec![
                    CellValue::Integer(4),
                    CellValue::guess("abc"),
                    CellValue::guess("A"),
                ]),
                Row::new(vec![
                    CellValue::Float(-1.5),
                    CellValue::guess("2"),
                    CellValue::guess("B"),
                ]),
            ],
        )
    }

    #[test]
    fn test_feature_columns_skip_class() {
        let cols = feature_columns(&dataset(), 2);
        let names: Vec<&str> = cols.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["x", "note"]);
    }

    #[test]
    fn test_partially_numeric_column() {
        let col = NumericColumn::from_dataset(&dataset(), 1);
        assert_eq!(col.values, vec![None, Some(2.0)]);
        assert!(!col.is_fully_numeric());
    }

    #[test]
    fn test_range() {
        let col = NumericColumn::from_dataset(&dataset(), 0);
        assert!(col.is_fully_numeric());
        assert_eq!(col.range(), Some((-1.5, 4.0)));
    }
}

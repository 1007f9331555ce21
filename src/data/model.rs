use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the grid
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value guessed from its text representation.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Guess the type of a raw text cell. Empty cells become `Null`.
    ///
    /// A typed value is only kept when it prints back as `raw`, so `label()`
    /// always returns the source text. `"1.0"`, `"01"` and `"1e3"` stay
    /// `Text` and still read as numbers through `as_f64`.
    pub fn guess(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return CellValue::Null;
        }
        let typed = if let Ok(i) = s.parse::<i64>() {
            Some(CellValue::Integer(i))
        } else if let Ok(f) = s.parse::<f64>() {
            Some(CellValue::Float(f))
        } else if s == "true" || s == "false" {
            Some(CellValue::Bool(s == "true"))
        } else {
            None
        };
        match typed {
            Some(value) if value.to_string() == raw => value,
            _ => CellValue::Text(raw.to_string()),
        }
    }

    /// Numeric reading of the cell. NaN and infinities do not count as numbers.
    pub fn as_f64(&self) -> Option<f64> {
        let v = match self {
            CellValue::Float(v) => *v,
            CellValue::Integer(i) => *i as f64,
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        v.is_finite().then_some(v)
    }

    /// Text used when the cell acts as a class label.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the grid
// ---------------------------------------------------------------------------

static NULL_CELL: CellValue = CellValue::Null;

/// One row; `cells[i]` belongs to `TabularDataset::column_names[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Row { cells }
    }

    /// Cell at `column`, `Null` when the row is shorter than the header.
    pub fn get(&self, column: usize) -> &CellValue {
        self.cells.get(column).unwrap_or(&NULL_CELL)
    }
}

// ---------------------------------------------------------------------------
// TabularDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Name of the label column looked up when no explicit one is configured.
pub const DEFAULT_CLASS_COLUMN: &str = "class";

/// The full parsed dataset.
#[derive(Debug, Clone, Default)]
pub struct TabularDataset {
    /// All rows, in file order.
    pub rows: Vec<Row>,
    /// Ordered column names as they appear in the source.
    pub column_names: Vec<String>,
}

impl TabularDataset {
    pub fn from_rows(column_names: Vec<String>, rows: Vec<Row>) -> Self {
        TabularDataset { rows, column_names }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column called `name`, exact match first, then
    /// case-insensitive.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names
            .iter()
            .position(|c| c == name)
            .or_else(|| {
                self.column_names
                    .iter()
                    .position(|c| c.eq_ignore_ascii_case(name))
            })
    }

    /// The column named `class` (any case), if present.
    pub fn class_column_index(&self) -> Option<usize> {
        self.column_index(DEFAULT_CLASS_COLUMN)
    }

    /// Cell at (`row`, `column`).
    pub fn value(&self, row: usize, column: usize) -> &CellValue {
        self.rows[row].get(column)
    }

    /// Class labels of every row, read from `class_column`.
    pub fn labels(&self, class_column: usize) -> Vec<String> {
        self.rows.iter().map(|r| r.get(class_column).label()).collect()
    }

    /// Sorted distinct class labels.
    pub fn class_names(&self, class_column: usize) -> BTreeSet<String> {
        self.rows.iter().map(|r| r.get(class_column).label()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_cell_types() {
        assert_eq!(CellValue::guess("42"), CellValue::Integer(42));
        assert_eq!(CellValue::guess("2.5"), CellValue::Float(2.5));
        assert_eq!(CellValue::guess("true"), CellValue::Bool(true));
        assert_eq!(CellValue::guess("  "), CellValue::Null);
        assert_eq!(
            CellValue::guess("setosa"),
            CellValue::Text("setosa".to_string())
        );
    }

    #[test]
    fn test_as_f64_rejects_non_finite() {
        assert_eq!(CellValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Text(" 1.5 ".into()).as_f64(), Some(1.5));
        assert_eq!(CellValue::Float(f64::NAN).as_f64(), None);
        assert_eq!(CellValue::Text("inf".into()).as_f64(), None);
        assert_eq!(CellValue::Text("abc".into()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }

    #[test]
    fn test_class_column_lookup_is_case_insensitive() {
        let ds = TabularDataset::from_rows(
            vec!["x".into(), "Class".into()],
            vec![Row::new(vec![CellValue::Integer(1), CellValue::guess("A")])],
        );
        assert_eq!(ds.class_column_index(), Some(1));
        assert_eq!(ds.column_index("X"), Some(0));
        assert_eq!(ds.column_index("missing"), None);
    }

    #[test]
    fn test_short_rows_read_as_null() {
        let ds = TabularDataset::from_rows(
            vec!["a".into(), "b".into()],
            vec![Row::new(vec![CellValue::Integer(1)])],
        );
        assert_eq!(ds.value(0, 1), &CellValue::Null);
    }

    #[test]
    fn test_guess_keeps_label_text() {
        for raw in ["1.0", "01", "1e3", "+2", " 7"] {
            let cell = CellValue::guess(raw);
            assert_eq!(cell, CellValue::Text(raw.to_string()));
            assert_eq!(cell.label(), raw);
            assert!(cell.as_f64().is_some());
        }
        assert_eq!(CellValue::guess("-3"), CellValue::Integer(-3));
        assert_eq!(CellValue::guess("0.25"), CellValue::Float(0.25));
    }

    #[test]
    fn test_numeric_labels_stay_distinct() {
        let ds = TabularDataset::from_rows(
            vec!["x".into(), "class".into()],
            vec![
                Row::new(vec![CellValue::Integer(1), CellValue::guess("1.0")]),
                Row::new(vec![CellValue::Integer(2), CellValue::guess("1")]),
            ],
        );
        assert_eq!(ds.labels(1), ["1.0", "1"]);
        assert_eq!(ds.class_names(1).len(), 2);
    }
}

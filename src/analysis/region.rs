use std::fmt;

use serde::{Deserialize, Serialize};

/// A value interval on one attribute inside which every counted row carries
/// the same class label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PureRegion {
    /// Attribute (column) the interval lies on.
    pub attribute: String,
    /// Smallest covered value.
    pub start: f64,
    /// Largest covered value; the interval is closed on both ends.
    pub end: f64,
    /// The single class of every covered row.
    pub dominant_class: String,
    /// Number of rows covered.
    pub row_count: usize,
    /// `row_count` as a percentage of the rows of `dominant_class`.
    pub coverage_of_class: f64,
    /// `row_count` as a percentage of all rows.
    pub coverage_of_dataset: f64,
}

impl PureRegion {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `value` lies in `[start, end]`.
    pub fn contains_value(&self, value: f64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Whether `self` makes `other` redundant: same attribute and class,
    /// bounds enclose `other`'s, and at least as many rows.
    pub fn dominates(&self, other: &PureRegion) -> bool {
        self.attribute == other.attribute
            && self.dominant_class == other.dominant_class
            && self.start <= other.start
            && other.end <= self.end
            && other.row_count <= self.row_count
    }

    /// Either coverage measure reaches `threshold` percent.
    pub fn is_significant(&self, threshold: f64) -> bool {
        self.coverage_of_class >= threshold || self.coverage_of_dataset >= threshold
    }
}

impl fmt::Display for PureRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} <= {} <= {}, class {}, {} cases ({:.2}% of class, {:.2}% of dataset)",
            self.attribute,
            self.start,
            self.attribute,
            self.end,
            self.dominant_class,
            self.row_count,
            self.coverage_of_class,
            self.coverage_of_dataset
        )
    }
}

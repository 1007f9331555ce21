use crate::data::model::{CellValue, Row, TabularDataset};

use super::region::PureRegion;

/// Dataset from string literals, type-guessed like the CSV loader does.
pub(crate) fn dataset(columns: &[&str], rows: &[&[&str]]) -> TabularDataset {
    TabularDataset::from_rows(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|r| Row::new(r.iter().map(|c| CellValue::guess(c)).collect()))
            .collect(),
    )
}

/// The four-row `x = [1, 2, 3, 10]`, `class = [A, A, A, B]` example.
pub(crate) fn four_rows() -> TabularDataset {
    dataset(
        &["x", "class"],
        &[&["1", "A"], &["2", "A"], &["3", "A"], &["10", "B"]],
    )
}

/// Deterministic 60-row dataset with pure stretches and mixed ties.
pub(crate) fn noisy_dataset() -> TabularDataset {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for i in 0..60u64 {
        let h = i.wrapping_mul(2654435761) % 97;
        let a = i % 13;
        let class = if a < 4 {
            "A"
        } else if h % 2 == 0 {
            "B"
        } else {
            "C"
        };
        rows.push(vec![
            a.to_string(),
            format!("{:.1}", (h % 17) as f64 / 2.0),
            class.to_string(),
        ]);
    }
    let refs: Vec<Vec<&str>> = rows
        .iter()
        .map(|r| r.iter().map(String::as_str).collect())
        .collect();
    let slices: Vec<&[&str]> = refs.iter().map(Vec::as_slice).collect();
    dataset(&["a", "b", "class"], &slices)
}

/// Region literal with zero coverages.
pub(crate) fn region(attribute: &str, start: f64, end: f64, class: &str, count: usize) -> PureRegion {
    PureRegion {
        attribute: attribute.to_string(),
        start,
        end,
        dominant_class: class.to_string(),
        row_count: count,
        coverage_of_class: 0.0,
        coverage_of_dataset: 0.0,
    }
}

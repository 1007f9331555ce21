//! Text and tabular renderings of an analysis for reports and exports.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analysis::{PureRegion, ThresholdChoice};

/// Plain-text listing of significant regions, one per line.
pub fn format_regions(regions: &[PureRegion], threshold: f64) -> String {
    let mut out = format!(
        "Pure regions (threshold {threshold}%): {}\n",
        regions.len()
    );
    if regions.is_empty() {
        out.push_str("  none\n");
    }
    for region in regions {
        out.push_str("  ");
        out.push_str(&region.to_string());
        out.push('\n');
    }
    out
}

/// Status-bar style summary of how many rows remain visible.
pub fn visibility_summary(visible: usize, total: usize) -> String {
    let pct = if total > 0 {
        visible as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    format!("Visible cases: {visible} / Total cases: {total} = {pct:.2}% of dataset")
}

/// Write regions as CSV with a header row.
pub fn write_regions_csv<W: Write>(regions: &[PureRegion], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for region in regions {
        csv.serialize(region).context("writing region row")?;
    }
    csv.flush().context("flushing CSV output")?;
    Ok(())
}

/// Everything a report run produced, ready for one of the output formats.
#[derive(Serialize)]
pub struct ReportInput<'a> {
    pub dataset: &'a str,
    pub threshold: f64,
    pub total_rows: usize,
    pub easy_rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_threshold: Option<ThresholdChoice>,
    pub regions: &'a [PureRegion],
}

/// Pretty-printed JSON document of the whole report.
pub fn write_report_json<W: Write>(input: &ReportInput<'_>, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, input).context("writing JSON report")
}

/// Human-readable report: header, region list, visibility line.
pub fn write_report_text<W: Write>(input: &ReportInput<'_>, mut writer: W) -> Result<()> {
    writeln!(writer, "Dataset: {}", input.dataset)?;
    if let Some(best) = input.best_threshold {
        writeln!(
            writer,
            "Best threshold: {}% ({} rows remain visible)",
            best.threshold, best.visible_rows
        )?;
    }
    write!(writer, "{}", format_regions(input.regions, input.threshold))?;
    writeln!(
        writer,
        "{}",
        visibility_summary(input.total_rows - input.easy_rows, input.total_rows)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PureRegion> {
        vec![PureRegion {
            attribute: "x".into(),
            start: 1.0,
            end: 3.0,
            dominant_class: "A".into(),
            row_count: 3,
            coverage_of_class: 100.0,
            coverage_of_dataset: 75.0,
        }]
    }

    #[test]
    fn test_format_regions() {
        let text = format_regions(&sample(), 50.0);
        assert!(text.starts_with("Pure regions (threshold 50%): 1\n"));
        assert!(text.contains("x: 1 <= x <= 3, class A, 3 cases"));
        assert!(format_regions(&[], 5.0).contains("none"));
    }

    #[test]
    fn test_visibility_summary() {
        assert_eq!(
            visibility_summary(1, 4),
            "Visible cases: 1 / Total cases: 4 = 25.00% of dataset"
        );
        assert!(visibility_summary(0, 0).ends_with("0.00% of dataset"));
    }

    #[test]
    fn test_csv_export_has_header() {
        let mut buf = Vec::new();
        write_regions_csv(&sample(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("attribute,start,end,dominant_class,row_count,coverage_of_class,coverage_of_dataset")
        );
        assert_eq!(lines.next(), Some("x,1.0,3.0,A,3,100.0,75.0"));
    }

    #[test]
    fn test_json_report() {
        let regions = sample();
        let input = ReportInput {
            dataset: "toy",
            threshold: 50.0,
            total_rows: 4,
            easy_rows: 3,
            best_threshold: None,
            regions: &regions,
        };
        let mut buf = Vec::new();
        write_report_json(&input, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["dataset"], "toy");
        assert_eq!(value["regions"][0]["row_count"], 3);
        assert!(value.get("best_threshold").is_none());
    }

    #[test]
    fn test_text_report() {
        let regions = sample();
        let input = ReportInput {
            dataset: "toy",
            threshold: 50.0,
            total_rows: 4,
            easy_rows: 3,
            best_threshold: Some(ThresholdChoice {
                threshold: 0.0,
                visible_rows: 1,
            }),
            regions: &regions,
        };
        let mut buf = Vec::new();
        write_report_text(&input, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Dataset: toy"));
        assert!(text.contains("Best threshold: 0% (1 rows remain visible)"));
        assert!(text.contains("Visible cases: 1 / Total cases: 4"));
    }
}

//! Headless pure-region report for a labeled dataset.
//!
//! ```text
//! region-report iris.csv --threshold 10
//! region-report iris.parquet --best --format json > regions.json
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use purescope::analysis::{self, ThresholdChoice};
use purescope::config::{AnalysisConfig, load_config};
use purescope::data::loader;
use purescope::report::{self, ReportInput};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

/// Find class-pure attribute regions and report easy/hard cases
#[derive(Parser, Debug)]
#[command(name = "region-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Dataset file (.csv, .json, .parquet)
    input: PathBuf,

    /// JSON file with analysis settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Significance threshold in percent
    #[arg(long, short)]
    threshold: Option<f64>,

    /// Class-label column (default: the column named "class")
    #[arg(long)]
    class_column: Option<String>,

    /// Sweep thresholds and report at the one leaving the fewest visible rows
    #[arg(long)]
    best: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(t) = cli.threshold {
        config.threshold = t;
    }
    if cli.class_column.is_some() {
        config.class_column = cli.class_column.clone();
    }

    let dataset = loader::load_file(&cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;
    let name = loader::dataset_name(&cli.input);
    let class_column = analysis::resolve_class_column(&dataset, config.class_column.as_deref())?;

    let mut best_threshold: Option<ThresholdChoice> = None;
    let mut threshold = analysis::clamp_threshold(config.threshold);
    if cli.best {
        let choice = analysis::best_threshold(&dataset, class_column);
        threshold = choice.threshold;
        best_threshold = Some(choice);
    }

    let result = analysis::analyze(&dataset, class_column, threshold);
    let input = ReportInput {
        dataset: &name,
        threshold,
        total_rows: dataset.len(),
        easy_rows: result.hidden_rows.len(),
        best_threshold,
        regions: &result.regions,
    };

    let stdout = io::stdout().lock();
    match cli.format {
        Format::Text => report::write_report_text(&input, stdout)?,
        Format::Csv => report::write_regions_csv(&result.regions, stdout)?,
        Format::Json => report::write_report_json(&input, stdout)?,
    }
    Ok(())
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;

/// Write a synthetic labeled dataset with overlapping and separable classes
#[derive(Parser, Debug)]
#[command(name = "generate-sample")]
struct Cli {
    /// Rows per class
    #[arg(long, default_value_t = 50)]
    rows: usize,

    /// Output file; `.csv` or `.parquet`
    #[arg(long, default_value = "sample_data.csv")]
    output: PathBuf,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const ATTRIBUTES: [&str; 4] = ["sepal_length", "sepal_width", "petal_length", "petal_width"];

/// Per-class `(mean, std_dev)` of each attribute. The first class is
/// separable on the petal attributes; the other two overlap.
const CLASSES: [(&str, [(f64, f64); 4]); 3] = [
    ("setosa", [(5.0, 0.35), (3.4, 0.38), (1.5, 0.17), (0.25, 0.1)]),
    ("versicolor", [(5.9, 0.5), (2.8, 0.3), (4.3, 0.47), (1.3, 0.2)]),
    ("virginica", [(6.6, 0.6), (3.0, 0.3), (5.5, 0.55), (2.0, 0.27)]),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

struct Sample {
    columns: [Vec<f64>; 4],
    labels: Vec<String>,
}

fn generate(rows_per_class: usize, seed: u64) -> Sample {
    let mut rng = SimpleRng::new(seed);
    let mut columns: [Vec<f64>; 4] = Default::default();
    let mut labels = Vec::new();

    for (class, params) in &CLASSES {
        for _ in 0..rows_per_class {
            for (col, &(mean, sd)) in columns.iter_mut().zip(params) {
                // One decimal place, like the classic measurements; this also
                // produces the ties the region finder has to handle.
                let v = (rng.gauss(mean, sd).max(0.1) * 10.0).round() / 10.0;
                col.push(v);
            }
            labels.push(class.to_string());
        }
    }
    Sample { columns, labels }
}

fn write_csv(sample: &Sample, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    let mut header: Vec<&str> = ATTRIBUTES.to_vec();
    header.push("class");
    writer.write_record(&header)?;
    for (row, label) in sample.labels.iter().enumerate() {
        let mut record: Vec<String> = sample.columns.iter().map(|c| c[row].to_string()).collect();
        record.push(label.clone());
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(sample: &Sample, path: &Path) -> Result<()> {
    let mut fields: Vec<Field> = ATTRIBUTES
        .iter()
        .map(|name| Field::new(*name, DataType::Float64, false))
        .collect();
    fields.push(Field::new("class", DataType::Utf8, false));
    let schema = Arc::new(Schema::new(fields));

    let mut arrays: Vec<Arc<dyn arrow::array::Array>> = sample
        .columns
        .iter()
        .map(|c| Arc::new(Float64Array::from(c.clone())) as Arc<dyn arrow::array::Array>)
        .collect();
    arrays.push(Arc::new(StringArray::from(
        sample.labels.iter().map(String::as_str).collect::<Vec<_>>(),
    )));

    let batch = RecordBatch::try_new(schema.clone(), arrays).context("building record batch")?;
    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let sample = generate(cli.rows, cli.seed);

    let ext = cli
        .output
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => write_csv(&sample, &cli.output)?,
        "parquet" | "pq" => write_parquet(&sample, &cli.output)?,
        other => bail!("Unsupported output extension: .{other}"),
    }

    println!(
        "Wrote {} rows ({} classes) to {}",
        sample.labels.len(),
        CLASSES.len(),
        cli.output.display()
    );
    Ok(())
}

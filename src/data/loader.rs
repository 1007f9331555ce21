use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Row, TabularDataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a labeled tabular dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row followed by one record per line
/// * `.json`    – `[{ "sepal_length": 5.1, ..., "class": "setosa" }, ...]`
/// * `.parquet` – flat columns of strings, ints, floats or bools
pub fn load_file(path: &Path) -> Result<TabularDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    log::debug!(
        "{}: {} rows x {} columns",
        path.display(),
        dataset.len(),
        dataset.column_names.len()
    );
    Ok(dataset)
}

/// Dataset name shown in titles: the file stem.
pub fn dataset_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset")
        .to_string()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, every other row is a record.
/// Cells are type-guessed; short records are padded with nulls.
fn load_csv(path: &Path) -> Result<TabularDataset> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;
    read_csv(reader)
}

/// Parse CSV from any reader. Exposed for in-memory input.
pub fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<TabularDataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if record.len() > headers.len() {
            bail!(
                "CSV row {row_no}: {} cells but only {} columns",
                record.len(),
                headers.len()
            );
        }
        let mut cells: Vec<CellValue> = record.iter().map(CellValue::guess).collect();
        cells.resize(headers.len(), CellValue::Null);
        rows.push(Row::new(cells));
    }

    Ok(TabularDataset::from_rows(headers, rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "petal_length": 1.4, "petal_width": 0.2, "class": "setosa" },
///   ...
/// ]
/// ```
///
/// Columns are ordered by first appearance; missing keys read as null.
fn load_json(path: &Path) -> Result<TabularDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

/// Parse a JSON records array.
pub fn parse_json(text: &str) -> Result<TabularDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut column_names: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !column_names.contains(key) {
                column_names.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(|rec| rec.as_object())
        .map(|obj| {
            Row::new(
                column_names
                    .iter()
                    .map(|col| obj.get(col).map_or(CellValue::Null, json_to_cell))
                    .collect(),
            )
        })
        .collect();

    Ok(TabularDataset::from_rows(column_names, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::guess(s),
        // Guessed from the literal so `1.0` and `1` stay distinct labels.
        JsonValue::Number(n) => CellValue::guess(&n.to_string()),
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of flat columns. Nested columns are read as their
/// type name so the grid still shows them; they never parse as numbers.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<TabularDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let column_names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for row in 0..batch.num_rows() {
            let cells = batch
                .columns()
                .iter()
                .map(|col| extract_cell_value(col, row))
                .collect();
            rows.push(Row::new(cells));
        }
    }

    Ok(TabularDataset::from_rows(column_names, rows))
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell_value(col: &Arc<dyn Array>, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Null;
    }
    let any = col.as_any();
    match col.data_type() {
        DataType::Utf8 => any
            .downcast_ref::<StringArray>()
            .map_or(CellValue::Null, |s| CellValue::guess(s.value(row))),
        DataType::LargeUtf8 => CellValue::guess(col.as_string::<i64>().value(row)),
        DataType::Int32 => any
            .downcast_ref::<Int32Array>()
            .map_or(CellValue::Null, |a| CellValue::Integer(a.value(row) as i64)),
        DataType::Int64 => any
            .downcast_ref::<Int64Array>()
            .map_or(CellValue::Null, |a| CellValue::Integer(a.value(row))),
        DataType::Float32 => any
            .downcast_ref::<Float32Array>()
            .map_or(CellValue::Null, |a| CellValue::Float(a.value(row) as f64)),
        DataType::Float64 => any
            .downcast_ref::<Float64Array>()
            .map_or(CellValue::Null, |a| CellValue::Float(a.value(row))),
        DataType::Boolean => any
            .downcast_ref::<BooleanArray>()
            .map_or(CellValue::Null, |a| CellValue::Bool(a.value(row))),
        other => CellValue::Text(format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_pads_short_rows_and_skips_blank_lines() {
        let text = "x,y,class\n1,2,A\n3,,B\n,,\n5\n";
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let ds = read_csv(reader).unwrap();
        assert_eq!(ds.column_names, ["x", "y", "class"]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.value(1, 1), &CellValue::Null);
        assert_eq!(ds.value(2, 2), &CellValue::Null);
    }

    #[test]
    fn test_read_csv_rejects_long_rows() {
        let text = "x,class\n1,A,extra\n";
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        assert!(read_csv(reader).is_err());
    }

    #[test]
    fn test_parse_json_records() {
        let ds = parse_json(r#"[{"x": 1, "class": "A"}, {"x": 2.5, "extra": true}]"#).unwrap();
        assert_eq!(ds.len(), 2);
        let x = ds.column_index("x").unwrap();
        let class = ds.class_column_index().unwrap();
        assert_eq!(ds.value(0, x), &CellValue::Integer(1));
        assert_eq!(ds.value(1, x), &CellValue::Float(2.5));
        assert_eq!(ds.value(1, class), &CellValue::Null);
        assert_eq!(ds.column_names, ["x", "class", "extra"]);
    }

    #[test]
    fn test_parse_json_keeps_key_order() {
        let ds = parse_json(r#"[{"z": 1, "a": 2, "class": "A"}, {"b": 3, "z": 4}]"#).unwrap();
        assert_eq!(ds.column_names, ["z", "a", "class", "b"]);
    }

    #[test]
    fn test_parse_json_number_labels() {
        let ds = parse_json(r#"[{"x": 1, "class": 1.0}, {"x": 2, "class": 1}]"#).unwrap();
        assert_eq!(ds.labels(1), ["1.0", "1"]);
        assert_eq!(ds.value(0, 1).as_f64(), Some(1.0));
    }

    #[test]
    fn test_parse_json_requires_array() {
        assert!(parse_json(r#"{"x": 1}"#).is_err());
        assert!(parse_json(r#"[1, 2]"#).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_file(Path::new("data.xlsx")).unwrap_err();
        assert!(err.to_string().contains("Unsupported"));
    }

    #[test]
    fn test_dataset_name_is_file_stem() {
        assert_eq!(dataset_name(Path::new("/tmp/iris.csv")), "iris");
    }
}

/// Data layer: core types, loading, and per-pass column caches.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TabularDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ TabularDataset  │  Vec<Row>, ordered column names
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  column   │  cell text → Vec<Option<f64>> per attribute
///   └──────────┘
/// ```

pub mod column;
pub mod loader;
pub mod model;
pub mod transform;

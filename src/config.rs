use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Threshold the viewer's slider starts at.
pub const DEFAULT_THRESHOLD: f64 = 5.0;

/// Analysis settings shared by the viewer and the report tool.
///
/// ```json
/// { "threshold": 10, "class_column": "species", "hide_easy_cases": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Coverage percentage a region needs to count as significant.
    pub threshold: f64,
    /// Label column; `None` looks for a column named `class`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_column: Option<String>,
    /// Start with easy cases hidden.
    pub hide_easy_cases: bool,
    /// Min-max scale each axis of the parallel coordinates plot.
    pub normalize: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            class_column: None,
            hide_easy_cases: false,
            normalize: true,
        }
    }
}

pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let cfg: AnalysisConfig = serde_json::from_str(r#"{"class_column": "species"}"#).unwrap();
        assert_eq!(cfg.threshold, DEFAULT_THRESHOLD);
        assert_eq!(cfg.class_column.as_deref(), Some("species"));
        assert!(!cfg.hide_easy_cases);
        assert!(cfg.normalize);
    }

    #[test]
    fn test_load_config_reports_path() {
        let err = load_config(Path::new("/nonexistent/purescope.json")).unwrap_err();
        assert!(format!("{err:#}").contains("purescope.json"));
    }
}

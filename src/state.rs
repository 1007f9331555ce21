use std::collections::BTreeSet;

use crate::analysis::{self, AnalysisError, PureRegion, clamp_threshold};
use crate::color::ClassColors;
use crate::config::AnalysisConfig;
use crate::data::model::TabularDataset;
use crate::report;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// One exploration session: the loaded snapshot and everything derived from
/// it. Rendering code reads this; only the methods below mutate it.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<TabularDataset>,

    /// File stem of the loaded dataset, used in titles and reports.
    pub dataset_name: Option<String>,

    /// Resolved class column, if the dataset has one.
    pub class_column: Option<usize>,

    /// Significance threshold in percent.
    pub threshold: f64,

    /// Significant regions from the last recomputation.
    pub regions: Vec<PureRegion>,

    /// Easy rows from the last recomputation.
    pub hidden_rows: BTreeSet<usize>,

    /// Whether `hidden_rows` is applied as a row filter.
    pub hide_easy_cases: bool,

    /// Indices of rows currently shown (cached).
    pub visible_indices: Vec<usize>,

    /// Colour per class label.
    pub class_colors: ClassColors,

    /// Min-max scale plot axes.
    pub normalize: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Configured class column name, if any.
    class_column_name: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl AppState {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            dataset: None,
            dataset_name: None,
            class_column: None,
            threshold: clamp_threshold(config.threshold),
            regions: Vec::new(),
            hidden_rows: BTreeSet::new(),
            hide_easy_cases: config.hide_easy_cases,
            visible_indices: Vec::new(),
            class_colors: ClassColors::default(),
            normalize: config.normalize,
            status_message: None,
            class_column_name: config.class_column,
        }
    }

    /// Ingest a newly loaded dataset: reset derived state, then recompute at
    /// the current threshold.
    pub fn set_dataset(&mut self, dataset: TabularDataset, name: impl Into<String>) {
        self.regions.clear();
        self.hidden_rows.clear();
        self.status_message = None;

        match analysis::resolve_class_column(&dataset, self.class_column_name.as_deref()) {
            Ok(idx) => {
                self.class_colors = ClassColors::new(&dataset.class_names(idx));
                self.class_column = Some(idx);
            }
            Err(e) => {
                log::warn!("{e}");
                self.class_colors = ClassColors::default();
                self.class_column = None;
                self.status_message = Some(e.to_string());
            }
        }

        self.dataset = Some(dataset);
        self.dataset_name = Some(name.into());
        self.recompute();
    }

    /// Drop the dataset and everything derived from it.
    pub fn clear(&mut self) {
        self.dataset = None;
        self.dataset_name = None;
        self.class_column = None;
        self.regions.clear();
        self.hidden_rows.clear();
        self.visible_indices.clear();
        self.class_colors = ClassColors::default();
        self.status_message = None;
    }

    /// Recompute regions and hidden rows at the current threshold.
    pub fn recompute(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        match self.class_column {
            Some(idx) => {
                let result = analysis::analyze(ds, idx, self.threshold);
                self.regions = result.regions;
                self.hidden_rows = result.hidden_rows;
            }
            None => {
                self.regions.clear();
                self.hidden_rows.clear();
            }
        }
        self.refilter();
    }

    /// Change the threshold and recompute immediately.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = clamp_threshold(threshold);
        self.recompute();
    }

    /// Jump to the threshold leaving the fewest rows visible.
    pub fn apply_best_threshold(&mut self) -> Result<f64, AnalysisError> {
        let (Some(ds), Some(idx)) = (&self.dataset, self.class_column) else {
            return Err(AnalysisError::NoClassColumn);
        };
        let choice = analysis::best_threshold(ds, idx);
        self.set_threshold(choice.threshold);
        Ok(choice.threshold)
    }

    /// Flip the easy-case filter without recomputing the hidden set.
    pub fn toggle_easy_cases(&mut self) {
        self.hide_easy_cases = !self.hide_easy_cases;
        self.refilter();
    }

    /// Recompute `visible_indices` from the hidden set and the toggle.
    pub fn refilter(&mut self) {
        let total = self.dataset.as_ref().map_or(0, TabularDataset::len);
        self.visible_indices = if self.hide_easy_cases {
            (0..total).filter(|i| !self.hidden_rows.contains(i)).collect()
        } else {
            (0..total).collect()
        };
    }

    /// Rows not covered by any significant region, regardless of the toggle.
    pub fn hard_case_count(&self) -> usize {
        let total = self.dataset.as_ref().map_or(0, TabularDataset::len);
        total - self.hidden_rows.len()
    }

    /// Text listing of the current regions.
    pub fn region_report(&self) -> String {
        report::format_regions(&self.regions, self.threshold)
    }

    /// Visible / total summary line for the status bar.
    pub fn visibility_summary(&self) -> String {
        let total = self.dataset.as_ref().map_or(0, TabularDataset::len);
        report::visibility_summary(self.visible_indices.len(), total)
    }
}

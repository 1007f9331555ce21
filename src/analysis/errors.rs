use thiserror::Error;

/// Conditions under which no analysis can be run on a dataset.
///
/// Both are recoverable: the session keeps the dataset and shows the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// No class-label column could be identified.
    #[error("no class column found (expected a column named \"class\")")]
    NoClassColumn,
    /// A configured column name does not exist in the dataset.
    #[error("unknown column: {0}")]
    UnknownColumn(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

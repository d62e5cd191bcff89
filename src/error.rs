use thiserror::Error;

/// Errors surfaced at the configuration / ingestion boundary. Per-fold
/// classification is total over well-formed inputs and never fails.
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("dataset must contain at least 2 objects for leave-one-out")]
    DatasetTooSmall,

    #[error("type override lists {given} attributes, but the dataset has {expected}")]
    KindOverrideMismatch { given: usize, expected: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

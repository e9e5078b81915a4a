use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Two inputs disagree on a dimension (feature width, class width, row count).
    #[error("shape mismatch in {what}: expected {expected}, found {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A class label outside `[0, class_count)`.
    #[error("label {label} is outside the class range [0, {class_count})")]
    InvalidLabel { label: usize, class_count: usize },

    #[error("{0} contains no samples")]
    EmptyDataset(&'static str),

    /// Syntax error in a whitespace-delimited table; `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

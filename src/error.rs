//! Error types for the Drachma library.
//!
//! All errors are represented by the [`DrachmaError`] enum, which provides
//! detailed information about what went wrong.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Drachma operations.
#[derive(Error, Debug)]
pub enum DrachmaError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The training dataset file does not exist or is unreadable.
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    /// Dataset-related errors (malformed rows, empty corpus, etc.)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Analysis-related errors (normalization, tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Model-related errors (fitting, prediction)
    #[error("Model error: {0}")]
    Model(String),

    /// Artifact persistence errors (serialization, write/read failures)
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with DrachmaError.
pub type Result<T> = std::result::Result<T, DrachmaError>;

impl DrachmaError {
    /// Create a new dataset-not-found error.
    pub fn dataset_not_found<S: Into<String>>(msg: S) -> Self {
        DrachmaError::DatasetNotFound(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        DrachmaError::Dataset(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DrachmaError::Analysis(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        DrachmaError::Model(msg.into())
    }

    /// Create a new persistence error.
    pub fn persistence<S: Into<String>>(msg: S) -> Self {
        DrachmaError::Persistence(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DrachmaError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DrachmaError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = DrachmaError::dataset_not_found("transactions.csv");
        assert_eq!(error.to_string(), "Dataset not found: transactions.csv");

        let error = DrachmaError::model("not fitted");
        assert_eq!(error.to_string(), "Model error: not fitted");

        let error = DrachmaError::persistence("disk full");
        assert_eq!(error.to_string(), "Persistence error: disk full");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let drachma_error = DrachmaError::from(io_error);

        match drachma_error {
            DrachmaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}

//! Error types for loading well depth data.

use thiserror::Error;

/// Result type alias for well depth data operations.
pub type Result<T> = std::result::Result<T, WellDataError>;

/// Errors that stop a dataset from loading at all.
///
/// Malformed depth values are not errors; they load as NaN.
#[derive(Debug, Error)]
pub enum WellDataError {
    /// The CSV reader failed (bad quoting, IO error mid-stream).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent.
    #[error("Missing required column: {column}")]
    MissingColumn { column: &'static str },

    /// Gzip decompression failed.
    #[error("Failed to decompress gzip source: {0}")]
    Decompress(#[source] std::io::Error),

    /// The source bytes are not UTF-8.
    #[error("Source is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl WellDataError {
    /// Create a MissingColumn error.
    pub fn missing_column(column: &'static str) -> Self {
        Self::MissingColumn { column }
    }
}

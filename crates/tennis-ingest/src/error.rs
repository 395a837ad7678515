//! Error types for tennis data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during data ingestion operations.
///
/// A missing source file is not an error; readers report it as `None`.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed while walking a directory tree.
    #[error("failed to scan {path}: {message}")]
    Walk { path: PathBuf, message: String },

    /// A file-name pattern that is not a valid glob.
    #[error("invalid file pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars, even after the encoding fallback.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::CsvParse {
            path: PathBuf::from("/data/tennis_atp/atp_matches_1990.csv"),
            message: "bad quoting".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse CSV /data/tennis_atp/atp_matches_1990.csv: bad quoting"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("score".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}

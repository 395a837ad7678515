//! Error types for table export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing artifacts. All of them abort the build.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Filesystem operation failed.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temporary file could not be renamed over the destination.
    #[error("failed to move {temp_path} into place at {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to write CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// JSON serialization failed.
    #[error("failed to write JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, OutputError>;

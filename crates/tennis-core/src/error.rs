//! Error types for integration stages.

use thiserror::Error;

/// Errors raised while resolving dimensions or integrating matches.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reading a source file failed.
    #[error("ingest error: {0}")]
    Ingest(#[from] tennis_ingest::IngestError),

    /// Rewriting a column failed.
    #[error("normalization error: {0}")]
    Normalization(#[from] tennis_normalization::NormalizationError),

    /// Polars DataFrame operation error.
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// Result type for integration stages.
pub type Result<T> = std::result::Result<T, CoreError>;

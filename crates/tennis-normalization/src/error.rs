//! Error types for normalization operations.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur while rewriting match columns.
///
/// Bad cell values never fail; they normalize to blanks or `Unknown`.
#[derive(Debug, Error)]
pub enum NormalizationError {
    /// Polars operation failed.
    #[error("polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

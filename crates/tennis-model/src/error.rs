//! Configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating a build configuration.
///
/// These are the only fail-fast conditions of a build; bad or missing *data*
/// never produces one.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The data root does not exist.
    #[error("data root not found: {path}")]
    DataRootMissing { path: PathBuf },

    /// The data root exists but is not a directory.
    #[error("data root is not a directory: {path}")]
    DataRootNotDirectory { path: PathBuf },

    /// The output path exists and is not a directory.
    #[error("output path is not a directory: {path}")]
    OutDirNotDirectory { path: PathBuf },

    /// A year range whose start lies after its end.
    #[error("invalid {name} year range: {start}..={end}")]
    InvalidYearRange {
        name: &'static str,
        start: u16,
        end: u16,
    },

    /// A zero-sized worker pool or scan cap.
    #[error("{name} must be greater than zero")]
    ZeroValue { name: &'static str },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

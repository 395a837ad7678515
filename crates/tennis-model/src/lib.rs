//! Shared model definitions for the tennis master pipeline.
//!
//! This crate holds everything the other crates need to agree on:
//!
//! - **Source tags**: which provider a row came from ([`Source`])
//! - **Canonical schemas**: column names and orderings of every exported table ([`columns`])
//! - **Layout**: directory and file-name conventions of the raw data root ([`DataLayout`])
//! - **Configuration**: the explicit build configuration threaded through every stage
//!   ([`BuildConfig`])

pub mod columns;
pub mod config;
pub mod error;
pub mod layout;
pub mod source;

pub use config::{BuildConfig, YearRange};
pub use error::{ConfigError, Result};
pub use layout::{DataLayout, OutputFiles};
pub use source::Source;

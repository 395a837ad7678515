//! Tennis data ingestion utilities.
//!
//! This crate discovers, decodes and loads the raw tennis archives into
//! Polars DataFrames of nullable string columns.
//!
//! # Features
//!
//! - **CSV Loading**: UTF-8 with a Windows-1252 fallback, optional row cap,
//!   missing files as `None`
//! - **File Discovery**: sorted CSV listings and glob-pattern matching
//! - **Manifest**: a recursive inventory of every CSV under the data root
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tennis_ingest::{ReadOptions, matching_files, read_optional_csv};
//!
//! let slam_dir = Path::new("data/tennis_slam_pointbypoint");
//! let summaries = matching_files(slam_dir, "*-matches*.csv")?;
//!
//! let options = ReadOptions::default().with_row_limit(Some(10_000));
//! let frame = read_optional_csv(Path::new("data/tennis_atp/atp_matches_1990.csv"), &options)?;
//! ```

mod csv;
mod discovery;
mod error;
mod manifest;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{ReadOptions, TextEncoding, decode_bytes, read_csv_frame, read_optional_csv};

// === File Discovery ===
pub use discovery::{list_csv_files, matching_files};

// === Manifest ===
pub use manifest::{ManifestEntry, build_manifest, manifest_frame};

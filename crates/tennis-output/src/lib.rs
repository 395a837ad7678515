//! Export of pipeline tables.
//!
//! Every artifact is written to a temporary file next to its destination and
//! renamed into place once complete, so a reader never observes a partial file.

mod csv;
mod error;
mod fs;
mod json;

pub use csv::write_csv;
pub use error::{OutputError, Result};
pub use fs::ensure_dir;
pub use json::write_json;

//! CSV export.

use std::path::Path;

use polars::prelude::*;

use crate::error::{OutputError, Result};
use crate::fs::write_atomically;

/// Writes `df` as a CSV with a header row, replacing any existing file.
///
/// Nulls are written as empty fields.
pub fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    write_atomically(path, |writer| {
        CsvWriter::new(writer)
            .include_header(true)
            .finish(df)
            .map_err(|e| OutputError::Csv {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    })?;
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote CSV"
    );
    Ok(())
}

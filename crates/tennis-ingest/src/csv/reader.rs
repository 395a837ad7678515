//! CSV file reading into all-string DataFrames.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

use super::encoding::{TextEncoding, decode_bytes};

/// Options for reading one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Keep at most this many data rows.
    pub row_limit: Option<usize>,
}

impl ReadOptions {
    #[must_use]
    pub fn with_row_limit(mut self, row_limit: Option<usize>) -> Self {
        self.row_limit = row_limit;
        self
    }
}

/// Reads a CSV file into a DataFrame whose columns are all nullable strings.
///
/// Empty fields are nulls. A file with no content yields a frame with no
/// columns; a header-only file yields the header columns and zero rows.
pub fn read_csv_frame(path: &Path, options: &ReadOptions) -> Result<DataFrame> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let (text, encoding) = decode_bytes(bytes);
    if encoding == TextEncoding::Windows1252 {
        tracing::warn!(
            path = %path.display(),
            "file is not valid UTF-8, decoded as Windows-1252"
        );
    }
    if text.trim().is_empty() {
        return Ok(DataFrame::empty());
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_n_rows(options.row_limit)
        .into_reader_with_file_handle(Cursor::new(text.into_bytes()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read CSV"
    );
    Ok(df)
}

/// Like [`read_csv_frame`], but a missing file is `None` rather than an error.
pub fn read_optional_csv(path: &Path, options: &ReadOptions) -> Result<Option<DataFrame>> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "source file absent, skipping");
        return Ok(None);
    }
    read_csv_frame(path, options).map(Some)
}

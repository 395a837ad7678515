//! JSON export.

use std::path::Path;

use serde::Serialize;

use crate::error::{OutputError, Result};
use crate::fs::write_atomically;

/// Writes `value` as pretty-printed JSON, replacing any existing file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    write_atomically(path, |writer| {
        serde_json::to_writer_pretty(writer, value).map_err(|e| OutputError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[derive(Serialize)]
    struct Summary {
        rows: usize,
    }

    #[test]
    fn writes_pretty_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build_report.json");
        write_json(&path, &Summary { rows: 3 }).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"rows\": 3\n}");
    }
}

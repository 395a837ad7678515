//! Directory creation and the temp-file-then-rename protocol.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Creates `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| OutputError::Io {
        operation: "create directory",
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Runs `write` against a buffered temporary file, then renames it to `path`.
///
/// The temporary file is removed when `write` fails.
pub(crate) fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_dir(parent)?;
    }

    let temp_path = temp_path_for(path);
    let file = File::create(&temp_path).map_err(|e| OutputError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let written = write(&mut writer).and_then(|()| {
        writer.flush().map_err(|e| OutputError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })
    });
    if let Err(err) = written {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        write_atomically(&path, |w| {
            w.write_all(b"first").unwrap();
            Ok(())
        })
        .unwrap();
        write_atomically(&path, |w| {
            w.write_all(b"second").unwrap();
            Ok(())
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!dir.path().join("nested").join("report.json.tmp").exists());
    }

    #[test]
    fn failed_write_leaves_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dim_players.csv");
        let result = write_atomically(&path, |_| {
            Err(OutputError::Csv {
                path: PathBuf::from("dim_players.csv"),
                message: "boom".to_string(),
            })
        });

        assert!(result.is_err());
        assert!(!path.exists());
        assert!(!dir.path().join("dim_players.csv.tmp").exists());
    }
}

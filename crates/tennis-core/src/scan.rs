//! Parallel, order-preserving reads of per-year source files.

use std::path::PathBuf;

use polars::prelude::DataFrame;
use rayon::prelude::*;
use tennis_ingest::{ReadOptions, read_optional_csv};
use tennis_model::BuildConfig;

use crate::error::Result;

/// Reads batches of source files on a bounded worker pool.
///
/// Results always come back in the order the paths were given, whatever
/// order the workers finish in.
pub struct FileScanner {
    pool: Option<rayon::ThreadPool>,
}

impl FileScanner {
    /// Builds a scanner with `threads` workers; `None` uses rayon's global pool.
    pub fn new(threads: Option<usize>) -> Self {
        let pool = threads.and_then(|threads| {
            match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => Some(pool),
                Err(err) => {
                    tracing::warn!(threads, error = %err, "read pool unavailable, using global pool");
                    None
                }
            }
        });
        Self { pool }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(config.threads)
    }

    /// Reads every existing file in `paths`; missing files are skipped.
    pub fn read_all(&self, paths: &[PathBuf], options: &ReadOptions) -> Result<Vec<DataFrame>> {
        let results = self.install(|| {
            paths
                .par_iter()
                .map(|path| read_optional_csv(path, options))
                .collect::<Vec<_>>()
        });

        let mut frames = Vec::with_capacity(results.len());
        for result in results {
            if let Some(frame) = result? {
                frames.push(frame);
            }
        }
        Ok(frames)
    }

    fn install<T, F>(&self, action: F) -> T
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(action),
            None => action(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn keeps_path_order_and_skips_missing() {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for year in 1990..2000 {
            let path = dir.path().join(format!("atp_matches_{year}.csv"));
            if year % 3 != 0 {
                std::fs::write(&path, format!("tourney_id\n{year}-001\n")).unwrap();
            }
            paths.push(path);
        }

        let scanner = FileScanner::new(Some(3));
        let frames = scanner.read_all(&paths, &ReadOptions::default()).unwrap();

        let ids: Vec<String> = frames
            .iter()
            .map(|df| tennis_common::string_values(df, "tourney_id").unwrap().unwrap()[0]
                .clone()
                .unwrap())
            .collect();
        assert_eq!(
            ids,
            vec![
                "1990-001", "1991-001", "1993-001", "1994-001", "1996-001", "1997-001",
                "1999-001",
            ]
        );
    }
}

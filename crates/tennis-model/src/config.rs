//! Build configuration.
//!
//! A [`BuildConfig`] is created once by the caller and passed by reference into
//! every stage. There is no process-wide configuration state.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::layout::DataLayout;

/// Default per-file row cap for the tournament dimension scan.
pub const DEFAULT_TOURNAMENT_SCAN_CAP: usize = 10_000;

/// Inclusive range of calendar years scanned for a file series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

impl YearRange {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Tour match archives: 1968 through 2025.
    pub const fn matches() -> Self {
        Self::new(1968, 2025)
    }

    /// Tournament dimension scan: 1968 through 2024.
    pub const fn tournaments() -> Self {
        Self::new(1968, 2024)
    }

    /// ATP futures archive: 1991 through 2024.
    pub const fn futures() -> Self {
        Self::new(1991, 2024)
    }

    pub fn years(&self) -> RangeInclusive<u16> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            usize::from(self.end - self.start) + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self, name: &'static str) -> Result<()> {
        if self.start > self.end {
            return Err(ConfigError::InvalidYearRange {
                name,
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Explicit configuration for one pipeline build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory holding the raw source archives.
    pub data_root: PathBuf,
    /// Directory receiving every exported table.
    pub out_dir: PathBuf,
    /// Years scanned for tour match files.
    pub match_years: YearRange,
    /// Years scanned when deriving the tournament dimension.
    pub tournament_years: YearRange,
    /// Years scanned for ATP futures files.
    pub futures_years: YearRange,
    /// Rows read per year-file when deriving the tournament dimension.
    pub tournament_scan_cap: usize,
    /// Worker pool size for per-file reads (`None` lets rayon decide).
    pub threads: Option<usize>,
}

impl BuildConfig {
    pub fn new(data_root: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
            out_dir: out_dir.into(),
            match_years: YearRange::matches(),
            tournament_years: YearRange::tournaments(),
            futures_years: YearRange::futures(),
            tournament_scan_cap: DEFAULT_TOURNAMENT_SCAN_CAP,
            threads: None,
        }
    }

    #[must_use]
    pub fn with_match_years(mut self, years: YearRange) -> Self {
        self.match_years = years;
        self
    }

    #[must_use]
    pub fn with_tournament_years(mut self, years: YearRange) -> Self {
        self.tournament_years = years;
        self
    }

    #[must_use]
    pub fn with_futures_years(mut self, years: YearRange) -> Self {
        self.futures_years = years;
        self
    }

    #[must_use]
    pub fn with_tournament_scan_cap(mut self, cap: usize) -> Self {
        self.tournament_scan_cap = cap;
        self
    }

    #[must_use]
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// File-name conventions rooted at [`BuildConfig::data_root`].
    pub fn layout(&self) -> DataLayout {
        DataLayout::new(&self.data_root)
    }

    pub fn out_path(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }

    /// Checks the fail-fast conditions of a build.
    ///
    /// The data root must be an existing directory; the output path may be
    /// missing (it is created on export) but must not be a regular file.
    pub fn validate(&self) -> Result<()> {
        check_data_root(&self.data_root)?;
        if self.out_dir.exists() && !self.out_dir.is_dir() {
            return Err(ConfigError::OutDirNotDirectory {
                path: self.out_dir.clone(),
            });
        }
        self.match_years.validate("match")?;
        self.tournament_years.validate("tournament")?;
        self.futures_years.validate("futures")?;
        if self.tournament_scan_cap == 0 {
            return Err(ConfigError::ZeroValue {
                name: "tournament scan cap",
            });
        }
        if self.threads == Some(0) {
            return Err(ConfigError::ZeroValue { name: "threads" });
        }
        Ok(())
    }
}

fn check_data_root(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ConfigError::DataRootMissing {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(ConfigError::DataRootNotDirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_cover_full_history() {
        let config = BuildConfig::new("/data", "/out");
        assert_eq!(config.match_years.years(), 1968..=2025);
        assert_eq!(config.tournament_years.years(), 1968..=2024);
        assert_eq!(config.futures_years.years(), 1991..=2024);
        assert_eq!(config.tournament_scan_cap, 10_000);
        assert_eq!(config.match_years.len(), 58);
    }

    #[test]
    fn rejects_missing_data_root() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::new(dir.path().join("absent"), dir.path().join("out"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DataRootMissing { .. })
        ));
    }

    #[test]
    fn rejects_file_as_data_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("atp_players.csv");
        std::fs::write(&file, "player_id\n").unwrap();
        let config = BuildConfig::new(&file, dir.path().join("out"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DataRootNotDirectory { .. })
        ));
    }

    #[test]
    fn rejects_inverted_years_and_zero_pool() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::new(dir.path(), dir.path().join("out"))
            .with_match_years(YearRange::new(2000, 1990));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidYearRange { name: "match", .. })
        ));

        let config = BuildConfig::new(dir.path(), dir.path().join("out")).with_threads(Some(0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroValue { name: "threads" })
        ));
    }

    #[test]
    fn accepts_existing_root_and_missing_out_dir() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::new(dir.path(), dir.path().join("out"));
        assert!(config.validate().is_ok());
        assert_eq!(
            config.out_path("dim_players.csv"),
            dir.path().join("out").join("dim_players.csv")
        );
    }
}

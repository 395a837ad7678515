use std::path::Path;

use polars::prelude::DataFrame;
use serde::Serialize;

/// Record of a build, written as `build_report.json` once every table is exported.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub data_root: String,
    pub out_dir: String,
    pub artifacts: Vec<ArtifactSummary>,
    pub futures_included: bool,
    pub elapsed_ms: u64,
}

impl BuildReport {
    pub fn new(data_root: &Path, out_dir: &Path) -> Self {
        Self {
            data_root: data_root.display().to_string(),
            out_dir: out_dir.display().to_string(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, file: &str, df: &DataFrame) {
        self.artifacts.push(ArtifactSummary {
            file: file.to_string(),
            rows: df.height(),
            columns: df.width(),
        });
    }

    pub fn artifact(&self, file: &str) -> Option<&ArtifactSummary> {
        self.artifacts.iter().find(|artifact| artifact.file == file)
    }
}

/// One exported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSummary {
    pub file: String,
    pub rows: usize,
    pub columns: usize,
}

/// Outcome of a futures-only build.
#[derive(Debug, Clone)]
pub struct FuturesSummary {
    pub report: BuildReport,
    pub matches: usize,
    /// Distinct `event_year` values, in order of first appearance.
    pub years: Vec<String>,
    /// Distinct level labels, in order of first appearance.
    pub levels: Vec<String>,
}

//! Point-level and shot-level pass-through tables.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tennis_common::{constant_column, union_frames};
use tennis_ingest::{ReadOptions, matching_files};
use tennis_model::columns::SOURCE;
use tennis_model::layout::{CHARTING_POINTS_PATTERN, SLAM_POINTS_PATTERN};
use tennis_model::{BuildConfig, Source};

use crate::error::Result;
use crate::scan::FileScanner;

/// Grand Slam points and charting shots, each `None` when its archive has no rows.
#[derive(Debug, Default)]
pub struct PointTables {
    pub points: Option<DataFrame>,
    pub shots: Option<DataFrame>,
}

/// Concatenates the raw point files of both archives, tagging each with a leading `source`.
pub fn build_point_tables(config: &BuildConfig, scanner: &FileScanner) -> Result<PointTables> {
    let layout = config.layout();
    let points = tagged_union(
        scanner,
        &layout.slam_dir(),
        SLAM_POINTS_PATTERN,
        Source::SlamPbp,
    )?;
    let shots = tagged_union(
        scanner,
        &layout.charting_dir(),
        CHARTING_POINTS_PATTERN,
        Source::Mcp,
    )?;
    Ok(PointTables { points, shots })
}

fn tagged_union(
    scanner: &FileScanner,
    dir: &Path,
    pattern: &str,
    source: Source,
) -> Result<Option<DataFrame>> {
    let files: Vec<PathBuf> = matching_files(dir, pattern)?;
    let mut frames = Vec::with_capacity(files.len());
    for mut frame in scanner.read_all(&files, &ReadOptions::default())? {
        if frame.height() == 0 {
            continue;
        }
        let height = frame.height();
        frame.insert_column(0, constant_column(SOURCE, Some(source.as_str()), height))?;
        frames.push(frame);
    }
    if frames.is_empty() {
        tracing::debug!(source = %source, "no point rows");
        return Ok(None);
    }
    let table = union_frames(frames)?;
    tracing::info!(
        source = %source,
        files = files.len(),
        rows = table.height(),
        "collected point rows"
    );
    Ok(Some(table))
}

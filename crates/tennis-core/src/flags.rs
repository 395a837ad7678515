//! Point and shot availability flags.
//!
//! Availability is inferred from which archives are present, not from a
//! row-level join against them. Both passes only ever raise flags to `Y`.

use polars::prelude::DataFrame;
use tennis_common::{set_string_column, string_values};
use tennis_ingest::matching_files;
use tennis_model::BuildConfig;
use tennis_model::columns::{FLAG_YES, HAS_POINTS, HAS_SHOTS, TOURNEY_LEVEL, TOURNEY_NAME};
use tennis_model::layout::{CHARTING_POINTS_PATTERN, SLAM_POINTS_PATTERN};

use crate::error::Result;

/// Raw level code of Grand Slam events.
const GRAND_SLAM_CODE: &str = "G";

/// Lowercased event names recognized as Grand Slams when the level code is missing.
const GRAND_SLAM_NAMES: [&str; 5] = [
    "australian open",
    "roland garros",
    "french open",
    "wimbledon",
    "us open",
];

/// Sets `has_points = Y` on Grand Slam rows when point-by-point files exist.
///
/// Must run before level normalization, while `tourney_level` still holds raw codes.
pub fn flag_slam_points(config: &BuildConfig, mut df: DataFrame) -> Result<DataFrame> {
    if df.height() == 0 {
        return Ok(df);
    }
    let point_files = matching_files(&config.layout().slam_dir(), SLAM_POINTS_PATTERN)?;
    if point_files.is_empty() {
        tracing::debug!("no slam point files, has_points unchanged");
        return Ok(df);
    }

    let height = df.height();
    let levels = string_values(&df, TOURNEY_LEVEL)?.unwrap_or_else(|| vec![None; height]);
    let names = string_values(&df, TOURNEY_NAME)?.unwrap_or_else(|| vec![None; height]);
    let mut flags = string_values(&df, HAS_POINTS)?.unwrap_or_else(|| vec![None; height]);

    let mut flagged = 0usize;
    for ((flag, level), name) in flags.iter_mut().zip(&levels).zip(&names) {
        if is_grand_slam(level.as_deref(), name.as_deref()) {
            *flag = Some(FLAG_YES.to_string());
            flagged += 1;
        }
    }
    set_string_column(&mut df, HAS_POINTS, flags)?;
    tracing::info!(
        rows = flagged,
        files = point_files.len(),
        "flagged matches with point data"
    );
    Ok(df)
}

/// Sets `has_shots = Y` on every row when charting point files exist.
pub fn flag_mcp_shots(config: &BuildConfig, mut df: DataFrame) -> Result<DataFrame> {
    if df.height() == 0 {
        return Ok(df);
    }
    let shot_files = matching_files(&config.layout().charting_dir(), CHARTING_POINTS_PATTERN)?;
    if shot_files.is_empty() {
        tracing::debug!("no charting point files, has_shots unchanged");
        return Ok(df);
    }
    let height = df.height();
    set_string_column(&mut df, HAS_SHOTS, vec![Some(FLAG_YES.to_string()); height])?;
    tracing::info!(
        rows = height,
        files = shot_files.len(),
        "flagged matches with shot data"
    );
    Ok(df)
}

fn is_grand_slam(level: Option<&str>, name: Option<&str>) -> bool {
    if level.is_some_and(|level| level.trim() == GRAND_SLAM_CODE) {
        return true;
    }
    name.is_some_and(|name| {
        let name = name.to_lowercase();
        GRAND_SLAM_NAMES.iter().any(|slam| name.contains(slam))
    })
}

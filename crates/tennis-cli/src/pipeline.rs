//! Build orchestration: runs the stages in order and exports every table.
//!
//! Stages run inside `info_span!`s that log their duration. Tables are
//! written as soon as they are complete; the build report goes last.

use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use tennis_common::{string_values, union_frames};
use tennis_core::{
    FileScanner, build_players, build_point_tables, build_tournaments, flag_mcp_shots,
    flag_slam_points, integrate_futures, integrate_tour_matches, union_slam_matches,
};
use tennis_ingest::{build_manifest, manifest_frame};
use tennis_model::columns::{EVENT_YEAR, TOURNEY_LEVEL};
use tennis_model::{BuildConfig, OutputFiles};
use tennis_normalization::{enrich_match_fields, normalize_tourney_level};
use tennis_output::{ensure_dir, write_csv, write_json};

use crate::types::{BuildReport, FuturesSummary};

/// Runs `action` in a named span and logs how long it took.
fn stage<T>(name: &'static str, action: impl FnOnce() -> Result<T>) -> Result<T> {
    info_span!("stage", name).in_scope(|| {
        let start = Instant::now();
        let output = action()?;
        info!(duration_ms = start.elapsed().as_millis(), "stage complete");
        Ok(output)
    })
}

fn prepare(config: &BuildConfig) -> Result<()> {
    config.validate().context("invalid build configuration")?;
    ensure_dir(&config.out_dir).context("create output directory")?;
    Ok(())
}

fn export(
    config: &BuildConfig,
    report: &mut BuildReport,
    file: &str,
    df: &mut DataFrame,
) -> Result<()> {
    let path = config.out_path(file);
    write_csv(&path, df).with_context(|| format!("write {}", path.display()))?;
    report.record(file, df);
    info!(file, rows = df.height(), "exported table");
    Ok(())
}

/// Date and score decomposition followed by level normalization.
fn finalize_matches(df: DataFrame) -> Result<DataFrame> {
    let df = enrich_match_fields(df).context("enrich match fields")?;
    normalize_tourney_level(df).context("normalize tournament levels")
}

/// Inventories the data root and writes `manifest.csv`.
pub fn run_manifest(config: &BuildConfig) -> Result<BuildReport> {
    prepare(config)?;
    let mut report = BuildReport::new(&config.data_root, &config.out_dir);
    let started = Instant::now();
    write_manifest(config, &mut report)?;
    report.elapsed_ms = elapsed_ms(started);
    Ok(report)
}

fn write_manifest(config: &BuildConfig, report: &mut BuildReport) -> Result<()> {
    let mut manifest = stage("manifest", || {
        let entries = build_manifest(&config.data_root).context("scan data root")?;
        manifest_frame(&entries).context("build manifest table")
    })?;
    export(config, report, OutputFiles::MANIFEST, &mut manifest)
}

/// Full build: manifest, dimensions, integrated matches, point tables and the report.
///
/// With `with_futures` the futures-included and futures-only tables are written as well.
pub fn run_build(config: &BuildConfig, with_futures: bool) -> Result<BuildReport> {
    prepare(config)?;
    let started = Instant::now();
    let build_span = info_span!(
        "build",
        data_root = %config.data_root.display(),
        out_dir = %config.out_dir.display(),
        with_futures
    );
    let _build_guard = build_span.enter();

    let mut report = BuildReport::new(&config.data_root, &config.out_dir);
    report.futures_included = with_futures;
    let scanner = FileScanner::from_config(config);

    write_manifest(config, &mut report)?;

    let mut players = stage("players", || {
        build_players(config).context("resolve players")
    })?;
    export(config, &mut report, OutputFiles::PLAYERS, &mut players.dimension)?;
    export(
        config,
        &mut report,
        OutputFiles::PLAYER_ALIASES,
        &mut players.aliases,
    )?;

    let mut tournaments = stage("tournaments", || {
        build_tournaments(config, &scanner).context("resolve tournaments")
    })?;
    export(
        config,
        &mut report,
        OutputFiles::TOURNAMENTS,
        &mut tournaments.dimension,
    )?;
    export(
        config,
        &mut report,
        OutputFiles::TOURNAMENT_ALIASES,
        &mut tournaments.aliases,
    )?;

    let matches = stage("matches", || {
        let matches = integrate_tour_matches(config, &scanner).context("integrate tour matches")?;
        let matches = flag_slam_points(config, matches).context("flag point availability")?;
        let matches = flag_mcp_shots(config, matches).context("flag shot availability")?;
        union_slam_matches(config, matches).context("append slam matches")
    })?;

    if with_futures {
        let futures = stage("futures", || {
            integrate_futures(config, &scanner).context("integrate futures matches")
        })?;
        let mut combined = stage("futures_included", || {
            let combined = union_frames(vec![matches.clone(), futures.clone()])
                .context("append futures matches")?;
            finalize_matches(combined)
        })?;
        export(
            config,
            &mut report,
            OutputFiles::MATCHES_WITH_FUTURES,
            &mut combined,
        )?;
        let mut futures_only = stage("futures_only", || finalize_matches(futures))?;
        export(
            config,
            &mut report,
            OutputFiles::FUTURES_ONLY,
            &mut futures_only,
        )?;
    }

    let mut matches = stage("normalize", || finalize_matches(matches))?;
    export(config, &mut report, OutputFiles::MATCHES, &mut matches)?;

    let points = stage("points", || {
        build_point_tables(config, &scanner).context("collect point tables")
    })?;
    if let Some(mut table) = points.points {
        export(config, &mut report, OutputFiles::POINTS, &mut table)?;
    }
    if let Some(mut table) = points.shots {
        export(config, &mut report, OutputFiles::SHOTS, &mut table)?;
    }

    report.elapsed_ms = elapsed_ms(started);
    let report_path = config.out_path(OutputFiles::REPORT);
    write_json(&report_path, &report)
        .with_context(|| format!("write {}", report_path.display()))?;
    info!(
        artifacts = report.artifacts.len(),
        elapsed_ms = report.elapsed_ms,
        "build complete"
    );
    Ok(report)
}

/// Builds only `tennis_master_matches_futures_only.csv`.
pub fn run_futures_only(config: &BuildConfig) -> Result<FuturesSummary> {
    prepare(config)?;
    let started = Instant::now();
    let scanner = FileScanner::from_config(config);
    let mut report = BuildReport::new(&config.data_root, &config.out_dir);
    report.futures_included = true;

    let mut futures = stage("futures", || {
        let futures = integrate_futures(config, &scanner).context("integrate futures matches")?;
        finalize_matches(futures)
    })?;
    export(config, &mut report, OutputFiles::FUTURES_ONLY, &mut futures)?;
    report.elapsed_ms = elapsed_ms(started);

    Ok(FuturesSummary {
        matches: futures.height(),
        years: distinct_values(&futures, EVENT_YEAR)?,
        levels: distinct_values(&futures, TOURNEY_LEVEL)?,
        report,
    })
}

/// Distinct non-null values of a column in order of first appearance.
fn distinct_values(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    let Some(values) = string_values(df, column)? else {
        return Ok(Vec::new());
    };
    let mut distinct: Vec<String> = Vec::new();
    for value in values.into_iter().flatten() {
        if !distinct.contains(&value) {
            distinct.push(value);
        }
    }
    Ok(distinct)
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tennis_common::frame_from_columns;

    #[test]
    fn distinct_values_keep_first_appearance() {
        let df = frame_from_columns(vec![(
            "event_year",
            vec![
                Some("2019".to_string()),
                None,
                Some("2018".to_string()),
                Some("2019".to_string()),
            ],
        )])
        .unwrap();
        assert_eq!(distinct_values(&df, "event_year").unwrap(), vec!["2019", "2018"]);
        assert!(distinct_values(&df, "tourney_level").unwrap().is_empty());
    }
}

//! Tour and futures match integration.
//!
//! Each source is loaded year by year, canonicalized on its own and then
//! projected onto [`CANONICAL_MATCH_COLUMNS`]. Projection never invents a
//! column: a column no source provides is absent from the result.

use std::path::PathBuf;

use polars::prelude::DataFrame;
use tennis_common::{constant_column, select_present, set_string_column, string_values, union_frames};
use tennis_ingest::ReadOptions;
use tennis_model::columns::{
    CANONICAL_MATCH_COLUMNS, DISCIPLINE, DISCIPLINE_SINGLES, FLAG_NO, GENDER, HAS_POINTS,
    HAS_SHOTS, LOSER_ID, MATCH_ID, NORM_SUFFIX, NORMALIZED_MATCH_TEXT, ROUND, SOURCE, TOURNEY_DATE,
    TOURNEY_ID, WINNER_ID,
};
use tennis_model::{BuildConfig, Source};
use tennis_normalization::{match_id, normalize_name};

use crate::error::Result;
use crate::scan::FileScanner;

/// Integrated ATP and WTA matches, main draw and qualifying, with blank availability flags.
///
/// ATP rows come first, then WTA rows, each in year order.
pub fn integrate_tour_matches(config: &BuildConfig, scanner: &FileScanner) -> Result<DataFrame> {
    let layout = config.layout();
    let mut sources = Vec::with_capacity(Source::TOURS.len());
    for source in Source::TOURS {
        let paths: Vec<PathBuf> = config
            .match_years
            .years()
            .flat_map(|year| {
                std::iter::once(layout.matches_file(source, year))
                    .chain(layout.qualifying_file(source, year))
            })
            .collect();
        let raw = load_source(scanner, &paths, source)?;
        sources.push(canonicalize(raw, source)?);
    }
    let matches = project(union_frames(sources)?)?;
    tracing::info!(
        rows = matches.height(),
        columns = matches.width(),
        "integrated tour matches"
    );
    Ok(matches)
}

/// ATP futures matches, canonicalized and projected like tour matches.
pub fn integrate_futures(config: &BuildConfig, scanner: &FileScanner) -> Result<DataFrame> {
    let layout = config.layout();
    let paths: Vec<PathBuf> = config
        .futures_years
        .years()
        .map(|year| layout.futures_file(year))
        .collect();
    let raw = load_source(scanner, &paths, Source::AtpFutures)?;
    let matches = project(canonicalize(raw, Source::AtpFutures)?)?;
    tracing::info!(rows = matches.height(), "integrated futures matches");
    Ok(matches)
}

/// Concatenates the existing files of one source and tags the rows with it.
fn load_source(scanner: &FileScanner, paths: &[PathBuf], source: Source) -> Result<DataFrame> {
    let frames = scanner.read_all(paths, &ReadOptions::default())?;
    tracing::debug!(
        source = %source,
        files = frames.len(),
        "loaded match files"
    );
    let mut df = union_frames(frames)?;
    let height = df.height();
    df.with_column(constant_column(SOURCE, Some(source.as_str()), height))?;
    Ok(df)
}

/// Adds normalized text companions, the match id, gender and discipline.
///
/// Runs on empty frames too, so an empty source still carries its id and tag columns.
pub(crate) fn canonicalize(mut df: DataFrame, source: Source) -> Result<DataFrame> {
    let height = df.height();
    for column in NORMALIZED_MATCH_TEXT {
        if let Some(values) = string_values(&df, column)? {
            let normalized = values
                .iter()
                .map(|value| {
                    let name = normalize_name(value.as_deref());
                    (!name.is_empty()).then_some(name)
                })
                .collect();
            set_string_column(&mut df, &format!("{column}{NORM_SUFFIX}"), normalized)?;
        }
    }

    let tourney_ids = values_or_null(&df, TOURNEY_ID)?;
    let dates = values_or_null(&df, TOURNEY_DATE)?;
    let rounds = values_or_null(&df, ROUND)?;
    let winners = values_or_null(&df, WINNER_ID)?;
    let losers = values_or_null(&df, LOSER_ID)?;
    let ids = (0..height)
        .map(|idx| {
            let part = |values: &[Option<String>]| values[idx].clone().unwrap_or_default();
            Some(match_id(
                &part(&tourney_ids),
                &part(&dates),
                &part(&rounds),
                &part(&winners),
                &part(&losers),
            ))
        })
        .collect();
    set_string_column(&mut df, MATCH_ID, ids)?;

    df.with_column(constant_column(GENDER, source.gender(), height))?;
    df.with_column(constant_column(DISCIPLINE, Some(DISCIPLINE_SINGLES), height))?;
    Ok(df)
}

fn values_or_null(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    Ok(string_values(df, column)?.unwrap_or_else(|| vec![None; df.height()]))
}

/// Keeps the canonical columns present and appends `N` availability flags.
fn project(df: DataFrame) -> Result<DataFrame> {
    let mut projected = select_present(&df, &CANONICAL_MATCH_COLUMNS)?;
    let height = projected.height();
    projected.with_column(constant_column(HAS_POINTS, Some(FLAG_NO), height))?;
    projected.with_column(constant_column(HAS_SHOTS, Some(FLAG_NO), height))?;
    Ok(projected)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use tempfile::TempDir;
    use tennis_model::YearRange;

    const HEADER: &str = "tourney_id,tourney_name,surface,tourney_level,tourney_date,match_num,winner_id,winner_name,loser_id,loser_name,score,round,extra";

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn column(df: &DataFrame, name: &str) -> Vec<Option<String>> {
        string_values(df, name).unwrap().unwrap()
    }

    fn names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn config(root: &Path) -> BuildConfig {
        BuildConfig::new(root, root.join("out"))
            .with_match_years(YearRange::new(2019, 2020))
            .with_futures_years(YearRange::new(2019, 2020))
    }

    #[test]
    fn tour_rows_are_ordered_and_projected() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "tennis_atp/atp_matches_2020.csv",
            &format!("{HEADER}\n2020-1,Doha,Hard,A,20200106,1,2,B,1,A,6-4 6-4,F,x\n"),
        );
        write(
            dir.path(),
            "tennis_atp/atp_matches_qual_chall_2019.csv",
            &format!("{HEADER}\n2019-Q,Qual,Clay,C,20190101,1,3,C,4,D,6-0,Q1,x\n"),
        );
        write(
            dir.path(),
            "tennis_atp/atp_matches_2019.csv",
            &format!("{HEADER}\n2019-1,Brisbane,Hard,A,20181231,1,5,E,6,F,6-3,R32,x\n"),
        );
        write(
            dir.path(),
            "tennis_wta/wta_matches_2019.csv",
            &format!("{HEADER}\n2019-W,Sydney,Hard,P,20190107,1,7,G,8,H,6-2,SF,x\n"),
        );

        let df = integrate_tour_matches(&config(dir.path()), &FileScanner::new(None)).unwrap();

        assert_eq!(
            column(&df, "tourney_id"),
            vec![
                Some("2019-1".to_string()),
                Some("2019-Q".to_string()),
                Some("2020-1".to_string()),
                Some("2019-W".to_string()),
            ]
        );
        assert_eq!(
            column(&df, "gender"),
            vec![
                Some("M".to_string()),
                Some("M".to_string()),
                Some("M".to_string()),
                Some("W".to_string()),
            ]
        );
        assert_eq!(
            names(&df),
            vec![
                "match_id",
                "source",
                "tourney_id",
                "tourney_name",
                "surface",
                "tourney_level",
                "tourney_date",
                "match_num",
                "winner_id",
                "winner_name",
                "loser_id",
                "loser_name",
                "score",
                "round",
                "gender",
                "discipline",
                "has_points",
                "has_shots",
            ]
        );
        assert!(column(&df, "has_points").iter().all(|v| v.as_deref() == Some("N")));
        assert_eq!(column(&df, "source")[3].as_deref(), Some("wta"));
    }

    #[test]
    fn match_id_ignores_participant_order() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "tennis_atp/atp_matches_2019.csv",
            &format!("{HEADER}\nT,Event,Hard,A,20190101,1,100,A,200,B,6-4,F,x\n"),
        );
        write(
            dir.path(),
            "tennis_wta/wta_matches_2019.csv",
            &format!("{HEADER}\nT,Event,Hard,A,20190101,1,200,B,100,A,4-6,F,x\n"),
        );
        let df = integrate_tour_matches(&config(dir.path()), &FileScanner::new(None)).unwrap();
        let ids = column(&df, "match_id");
        assert_eq!(ids[0], ids[1]);
        assert_eq!(ids[0], Some(match_id("T", "20190101", "F", "100", "200")));
    }

    #[test]
    fn no_files_keep_tag_columns() {
        let dir = TempDir::new().unwrap();
        let df = integrate_tour_matches(&config(dir.path()), &FileScanner::new(None)).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(
            names(&df),
            vec![
                "match_id",
                "source",
                "gender",
                "discipline",
                "has_points",
                "has_shots"
            ]
        );
    }

    #[test]
    fn futures_are_tagged() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "tennis_atp/atp_matches_futures_2020.csv",
            &format!("{HEADER}\nF1,Futures,Clay,15,20200302,1,1,A,2,B,6-1,R32,x\n"),
        );
        let df = integrate_futures(&config(dir.path()), &FileScanner::new(None)).unwrap();
        assert_eq!(column(&df, "source"), vec![Some("atp_futures".to_string())]);
        assert_eq!(column(&df, "gender"), vec![Some("M".to_string())]);
        assert_eq!(column(&df, "has_shots"), vec![Some("N".to_string())]);
    }

    #[test]
    fn canonicalize_adds_normalized_text() {
        let df = tennis_common::frame_from_columns(vec![(
            "winner_name",
            vec![Some("rafael nadal".to_string()), None],
        )])
        .unwrap();
        let df = canonicalize(df, Source::Atp).unwrap();
        assert_eq!(
            column(&df, "winner_name_norm"),
            vec![Some("Rafael Nadal".to_string()), None]
        );
        assert_eq!(column(&df, "match_id")[0], column(&df, "match_id")[1]);
    }
}

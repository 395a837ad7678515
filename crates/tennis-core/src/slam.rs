//! Grand Slam match summaries as match rows.
//!
//! Summary files carry neither tournament ids nor player ids, so the event
//! slug stands in for the tournament and the match id is keyed by row
//! position within its file.

use polars::prelude::DataFrame;
use tennis_common::{frame_from_columns, string_values, union_frames};
use tennis_ingest::{ReadOptions, matching_files, read_csv_frame};
use tennis_model::columns::{
    BEST_OF, DISCIPLINE, DISCIPLINE_SINGLES, GENDER, LOSER_NAME, MATCH_ID, MATCH_NUM, ROUND,
    SLAM_EVENT, SLAM_MATCH_COLUMNS, SLAM_WINNER, SLAM_YEAR, SOURCE, TOURNEY_DATE, TOURNEY_ID,
    TOURNEY_NAME, WINNER_NAME,
};
use tennis_model::layout::SLAM_MATCHES_PATTERN;
use tennis_model::{BuildConfig, Source};
use tennis_normalization::{normalize_name, slam_match_id};

use crate::error::Result;

/// Projects every non-empty Grand Slam summary file, in file-name order.
///
/// `None` when the archive holds no summary rows.
pub fn load_slam_matches(config: &BuildConfig) -> Result<Option<DataFrame>> {
    let files = matching_files(&config.layout().slam_dir(), SLAM_MATCHES_PATTERN)?;
    let mut frames = Vec::with_capacity(files.len());
    for path in &files {
        let raw = read_csv_frame(path, &ReadOptions::default())?;
        if raw.height() == 0 {
            tracing::debug!(path = %path.display(), "empty slam summary, skipping");
            continue;
        }
        frames.push(project_summary(&raw)?);
    }
    if frames.is_empty() {
        return Ok(None);
    }
    let slam = union_frames(frames)?;
    tracing::info!(
        rows = slam.height(),
        files = files.len(),
        "loaded slam match summaries"
    );
    Ok(Some(slam))
}

/// Appends Grand Slam summary rows after `matches`, aligning columns by name.
pub fn union_slam_matches(config: &BuildConfig, matches: DataFrame) -> Result<DataFrame> {
    match load_slam_matches(config)? {
        Some(slam) => Ok(union_frames(vec![matches, slam])?),
        None => Ok(matches),
    }
}

fn project_summary(raw: &DataFrame) -> Result<DataFrame> {
    let height = raw.height();
    let column = |name: &str| -> Result<Vec<Option<String>>> {
        Ok(string_values(raw, name)?.unwrap_or_else(|| vec![None; height]))
    };
    let events = column(SLAM_EVENT)?;
    let years = column(SLAM_YEAR)?;
    let rounds = column(ROUND)?;

    let names = events
        .iter()
        .map(|event| {
            let name = normalize_name(event.as_deref());
            (!name.is_empty()).then_some(name)
        })
        .collect();
    let ids = (0..height)
        .map(|idx| {
            let part = |values: &[Option<String>]| values[idx].clone().unwrap_or_default();
            Some(slam_match_id(
                &part(&events),
                &part(&years),
                &part(&rounds),
                idx,
            ))
        })
        .collect();
    let constant = |value: &str| vec![Some(value.to_string()); height];

    let values = vec![
        (SOURCE, constant(Source::SlamPbp.as_str())),
        (TOURNEY_NAME, names),
        (TOURNEY_ID, events),
        (TOURNEY_DATE, years),
        (MATCH_NUM, column(MATCH_NUM)?),
        (WINNER_NAME, column(SLAM_WINNER)?),
        (LOSER_NAME, vec![None; height]),
        (ROUND, rounds),
        (BEST_OF, vec![None; height]),
        (GENDER, vec![None; height]),
        (DISCIPLINE, constant(DISCIPLINE_SINGLES)),
        (MATCH_ID, ids),
    ];
    debug_assert!(
        values
            .iter()
            .map(|(name, _)| *name)
            .eq(SLAM_MATCH_COLUMNS.iter().copied())
    );
    Ok(frame_from_columns(values)?)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn column(df: &DataFrame, name: &str) -> Vec<Option<String>> {
        string_values(df, name).unwrap().unwrap()
    }

    #[test]
    fn summaries_project_onto_slam_columns() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "tennis_slam_pointbypoint/2019-wimbledon-matches.csv",
            "match_id,year,slam,match_num,player1,player2,winner,round\n\
             2019-wimbledon-1101,2019,wimbledon,1101,Novak Djokovic,Philipp Kohlschreiber,1,1\n\
             2019-wimbledon-1102,2019,wimbledon,1102,Ugo Humbert,Jeremy Chardy,2,1\n",
        );
        write(dir.path(), "tennis_slam_pointbypoint/2018-usopen-matches.csv", "");
        let config = BuildConfig::new(dir.path(), dir.path().join("out"));

        let slam = load_slam_matches(&config).unwrap().unwrap();

        let names: Vec<String> = slam
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, SLAM_MATCH_COLUMNS);
        assert_eq!(slam.height(), 2);
        assert_eq!(
            column(&slam, "tourney_name")[0].as_deref(),
            Some("Wimbledon")
        );
        assert_eq!(column(&slam, "tourney_id")[0].as_deref(), Some("wimbledon"));
        assert_eq!(column(&slam, "tourney_date")[1].as_deref(), Some("2019"));
        assert_eq!(column(&slam, "loser_name"), vec![None, None]);
        assert_eq!(
            column(&slam, "match_id"),
            vec![
                Some(slam_match_id("wimbledon", "2019", "1", 0)),
                Some(slam_match_id("wimbledon", "2019", "1", 1)),
            ]
        );
    }

    #[test]
    fn union_appends_after_tour_rows() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "tennis_slam_pointbypoint/2019-wimbledon-matches.csv",
            "year,slam,match_num,winner,round\n2019,wimbledon,1101,1,1\n",
        );
        let config = BuildConfig::new(dir.path(), dir.path().join("out"));
        let tour = frame_from_columns(vec![
            ("match_id", vec![Some("abc".to_string())]),
            ("has_points", vec![Some("N".to_string())]),
        ])
        .unwrap();

        let all = union_slam_matches(&config, tour).unwrap();

        assert_eq!(all.height(), 2);
        assert_eq!(
            column(&all, "source"),
            vec![None, Some("slam_pbp".to_string())]
        );
        assert_eq!(column(&all, "has_points"), vec![Some("N".to_string()), None]);
    }

    #[test]
    fn missing_archive_leaves_matches_alone() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::new(dir.path(), dir.path().join("out"));
        assert!(load_slam_matches(&config).unwrap().is_none());
    }
}

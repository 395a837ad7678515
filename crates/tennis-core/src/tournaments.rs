//! Tournament dimension and alias table.
//!
//! Tour match files carry structured tournament ids; Grand Slam and charting
//! archives only identify events through their file names, which become
//! id-less alias rows for later reconciliation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tennis_common::{empty_frame, frame_from_columns, string_values};
use tennis_ingest::{ReadOptions, list_csv_files, matching_files};
use tennis_model::columns::{
    TOUR_ALIAS_SOURCE, TOURNAMENT_ALIAS_COLUMNS, TOURNAMENT_COLUMNS, TOURNEY_ID, TOURNEY_NAME,
};
use tennis_model::layout::CHARTING_MATCHES_PATTERN;
use tennis_model::{BuildConfig, Source};
use tennis_normalization::normalize_name;

use crate::error::Result;
use crate::scan::FileScanner;

/// The tournament dimension and its alias table.
#[derive(Debug)]
pub struct TournamentTables {
    pub dimension: DataFrame,
    pub aliases: DataFrame,
}

/// Derives tournaments from the leading rows of each tour year-file.
pub fn build_tournaments(config: &BuildConfig, scanner: &FileScanner) -> Result<TournamentTables> {
    let layout = config.layout();
    let paths: Vec<PathBuf> = Source::TOURS
        .iter()
        .flat_map(|source| {
            config
                .tournament_years
                .years()
                .map(|year| layout.matches_file(*source, year))
        })
        .collect();
    let options = ReadOptions::default().with_row_limit(Some(config.tournament_scan_cap));
    let frames = scanner.read_all(&paths, &options)?;

    let rows: usize = frames.iter().map(DataFrame::height).sum();
    if rows == 0 {
        tracing::info!("no tour match rows, tournament dimension is empty");
        return Ok(TournamentTables {
            dimension: empty_frame(&TOURNAMENT_COLUMNS)?,
            aliases: empty_frame(&TOURNAMENT_ALIAS_COLUMNS)?,
        });
    }

    let mut tables = TournamentCollector::default();
    for frame in &frames {
        tables.collect(frame)?;
    }

    let mut aliases = tables.tour_aliases();
    aliases.extend(slam_aliases(&layout.slam_dir())?);
    aliases.extend(charting_aliases(&layout.charting_dir())?);

    tracing::info!(
        tournaments = tables.rows.len(),
        aliases = aliases.len(),
        "resolved tournament dimension"
    );
    Ok(TournamentTables {
        dimension: tables.dimension_frame()?,
        aliases: alias_frame(aliases)?,
    })
}

type TournamentRow = [Option<String>; 6];

#[derive(Debug, Clone, PartialEq, Eq)]
struct AliasRow {
    tourney_id: Option<String>,
    alias: String,
    source: &'static str,
}

/// Keeps the first row seen for every non-blank tournament id.
#[derive(Debug, Default)]
struct TournamentCollector {
    seen: HashSet<String>,
    rows: Vec<TournamentRow>,
}

impl TournamentCollector {
    fn collect(&mut self, frame: &DataFrame) -> Result<()> {
        let height = frame.height();
        let mut columns = Vec::with_capacity(TOURNAMENT_COLUMNS.len());
        for name in TOURNAMENT_COLUMNS {
            columns.push(string_values(frame, name)?.unwrap_or_else(|| vec![None; height]));
        }
        for idx in 0..height {
            let Some(id) = columns[0][idx]
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
            else {
                continue;
            };
            if !self.seen.insert(id.to_string()) {
                continue;
            }
            self.rows
                .push(std::array::from_fn(|column| columns[column][idx].clone()));
        }
        Ok(())
    }

    fn tour_aliases(&self) -> Vec<AliasRow> {
        let name_index = column_index(TOURNEY_NAME);
        let id_index = column_index(TOURNEY_ID);
        self.rows
            .iter()
            .map(|row| AliasRow {
                tourney_id: row[id_index].clone(),
                alias: normalize_name(row[name_index].as_deref()),
                source: TOUR_ALIAS_SOURCE,
            })
            .collect()
    }

    fn dimension_frame(&self) -> Result<DataFrame> {
        let columns = TOURNAMENT_COLUMNS
            .iter()
            .enumerate()
            .map(|(column, name)| {
                (
                    *name,
                    self.rows.iter().map(|row| row[column].clone()).collect(),
                )
            })
            .collect();
        Ok(frame_from_columns(columns)?)
    }
}

fn column_index(name: &str) -> usize {
    TOURNAMENT_COLUMNS
        .iter()
        .position(|column| *column == name)
        .unwrap_or_default()
}

/// One alias per Grand Slam summary or points file, named by the event in the file stem.
///
/// `2019-wimbledon-matches.csv` yields `Wimbledon`.
fn slam_aliases(dir: &Path) -> Result<Vec<AliasRow>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut aliases = Vec::new();
    for path in list_csv_files(dir)? {
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if !(stem.contains("-matches") || stem.contains("-points")) {
            continue;
        }
        let event = stem.split('-').nth(1);
        aliases.push(AliasRow {
            tourney_id: None,
            alias: normalize_name(event),
            source: Source::SlamPbp.as_str(),
        });
    }
    Ok(aliases)
}

/// One blank alias per charting match list.
fn charting_aliases(dir: &Path) -> Result<Vec<AliasRow>> {
    let aliases = matching_files(dir, CHARTING_MATCHES_PATTERN)?
        .iter()
        .map(|_| AliasRow {
            tourney_id: None,
            alias: String::new(),
            source: Source::Mcp.as_str(),
        })
        .collect();
    Ok(aliases)
}

fn alias_frame(rows: Vec<AliasRow>) -> Result<DataFrame> {
    let mut ids = Vec::with_capacity(rows.len());
    let mut aliases = Vec::with_capacity(rows.len());
    let mut sources = Vec::with_capacity(rows.len());
    for row in rows {
        ids.push(row.tourney_id);
        aliases.push((!row.alias.is_empty()).then_some(row.alias));
        sources.push(Some(row.source.to_string()));
    }
    let [id_column, alias_column, source_column] = TOURNAMENT_ALIAS_COLUMNS;
    Ok(frame_from_columns(vec![
        (id_column, ids),
        (alias_column, aliases),
        (source_column, sources),
    ])?)
}

#[cfg(test)]
mod tests {
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

    fn config(root: &Path) -> BuildConfig {
        BuildConfig::new(root, root.join("out"))
            .with_tournament_years(tennis_model::YearRange::new(2019, 2020))
    }

    const HEADER: &str = "tourney_id,tourney_name,surface,draw_size,tourney_level,tourney_date";

    #[test]
    fn first_occurrence_per_id_wins() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "tennis_atp/atp_matches_2019.csv",
            &format!(
                "{HEADER}\n2019-540,Wimbledon,Grass,128,G,20190701\n2019-540,Wimbledon,Grass,128,G,20190702\n,Orphan,Clay,32,A,20190101\n"
            ),
        );
        write(
            dir.path(),
            "tennis_wta/wta_matches_2019.csv",
            &format!("{HEADER}\n2019-540,Wimbledon Ladies,Grass,128,G,20190701\n2019-W1,Brisbane,Hard,32,P,20181231\n"),
        );

        let tables = build_tournaments(&config(dir.path()), &FileScanner::new(None)).unwrap();

        assert_eq!(
            column(&tables.dimension, "tourney_id"),
            vec![Some("2019-540".to_string()), Some("2019-W1".to_string())]
        );
        assert_eq!(
            column(&tables.dimension, "tourney_date"),
            vec![Some("20190701".to_string()), Some("20181231".to_string())]
        );
        assert_eq!(
            column(&tables.aliases, "source"),
            vec![Some("tour".to_string()), Some("tour".to_string())]
        );
    }

    #[test]
    fn file_name_aliases_follow_tour_aliases() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "tennis_atp/atp_matches_2020.csv",
            &format!("{HEADER}\n2020-580,australian_open,Hard,128,G,20200120\n"),
        );
        write(dir.path(), "tennis_slam_pointbypoint/2019-wimbledon-matches.csv", "slam\n");
        write(dir.path(), "tennis_slam_pointbypoint/2019-usopen-points.csv", "slam\n");
        write(dir.path(), "tennis_slam_pointbypoint/readme.csv", "x\n");
        write(dir.path(), "tennis_MatchChartingProject/charting-m-matches.csv", "match_id\n");
        write(dir.path(), "tennis_MatchChartingProject/charting-m-points-2010s.csv", "match_id\n");

        let tables = build_tournaments(&config(dir.path()), &FileScanner::new(None)).unwrap();

        assert_eq!(
            column(&tables.aliases, "alias"),
            vec![
                Some("Australian Open".to_string()),
                Some("Usopen".to_string()),
                Some("Wimbledon".to_string()),
                None,
            ]
        );
        assert_eq!(
            column(&tables.aliases, "source"),
            vec![
                Some("tour".to_string()),
                Some("slam_pbp".to_string()),
                Some("slam_pbp".to_string()),
                Some("mcp".to_string()),
            ]
        );
        assert_eq!(column(&tables.aliases, "tourney_id")[1], None);
    }

    #[test]
    fn no_tour_rows_skip_file_name_aliases() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "tennis_slam_pointbypoint/2019-wimbledon-matches.csv", "slam\n");

        let tables = build_tournaments(&config(dir.path()), &FileScanner::new(None)).unwrap();

        assert_eq!(tables.dimension.height(), 0);
        assert_eq!(tables.dimension.width(), 6);
        assert_eq!(tables.aliases.height(), 0);
        assert_eq!(tables.aliases.width(), 3);
    }

    #[test]
    fn scan_cap_limits_rows_per_file() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "tennis_atp/atp_matches_2019.csv",
            &format!("{HEADER}\nA,One,Hard,32,A,20190101\nB,Two,Hard,32,A,20190108\n"),
        );
        let config = config(dir.path()).with_tournament_scan_cap(1);
        let tables = build_tournaments(&config, &FileScanner::new(None)).unwrap();
        assert_eq!(column(&tables.dimension, "tourney_id"), vec![Some("A".to_string())]);
    }
}

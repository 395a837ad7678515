//! Directory and file-name conventions of the raw data root and the output directory.

use std::path::{Path, PathBuf};

use crate::source::Source;

/// ATP archive directory.
pub const ATP_DIR: &str = "tennis_atp";
/// WTA archive directory.
pub const WTA_DIR: &str = "tennis_wta";
/// Grand Slam point-by-point directory.
pub const SLAM_DIR: &str = "tennis_slam_pointbypoint";
/// Match Charting Project directory.
pub const CHARTING_DIR: &str = "tennis_MatchChartingProject";

/// Grand Slam point files.
pub const SLAM_POINTS_PATTERN: &str = "*-points*.csv";
/// Grand Slam match summaries.
pub const SLAM_MATCHES_PATTERN: &str = "*-matches*.csv";
/// Charting point files.
pub const CHARTING_POINTS_PATTERN: &str = "charting-*-points-*.csv";
/// Charting match lists.
pub const CHARTING_MATCHES_PATTERN: &str = "charting-*-matches.csv";

/// Resolves source file paths beneath a data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Archive directory of a tour source; futures live in the ATP archive.
    pub fn tour_dir(&self, source: Source) -> PathBuf {
        match source {
            Source::Wta => self.root.join(WTA_DIR),
            Source::Atp | Source::AtpFutures => self.root.join(ATP_DIR),
            Source::SlamPbp => self.slam_dir(),
            Source::Mcp => self.charting_dir(),
        }
    }

    pub fn slam_dir(&self) -> PathBuf {
        self.root.join(SLAM_DIR)
    }

    pub fn charting_dir(&self) -> PathBuf {
        self.root.join(CHARTING_DIR)
    }

    /// `atp_players.csv` / `wta_players.csv`.
    pub fn players_file(&self, source: Source) -> PathBuf {
        self.tour_dir(source)
            .join(format!("{}_players.csv", source.file_prefix()))
    }

    /// Main-draw file of a tour year, `atp_matches_1990.csv`.
    pub fn matches_file(&self, source: Source, year: u16) -> PathBuf {
        self.tour_dir(source)
            .join(format!("{}_matches_{year}.csv", source.file_prefix()))
    }

    /// Qualifying file of a tour year; ATP pairs it with challengers, WTA with ITF events.
    pub fn qualifying_file(&self, source: Source, year: u16) -> Option<PathBuf> {
        let name = match source {
            Source::Atp => format!("atp_matches_qual_chall_{year}.csv"),
            Source::Wta => format!("wta_matches_qual_itf_{year}.csv"),
            _ => return None,
        };
        Some(self.tour_dir(source).join(name))
    }

    /// `atp_matches_futures_1991.csv`.
    pub fn futures_file(&self, year: u16) -> PathBuf {
        self.tour_dir(Source::AtpFutures)
            .join(format!("atp_matches_futures_{year}.csv"))
    }
}

/// File names of every exported artifact.
pub struct OutputFiles;

impl OutputFiles {
    pub const MANIFEST: &'static str = "manifest.csv";
    pub const PLAYERS: &'static str = "dim_players.csv";
    pub const PLAYER_ALIASES: &'static str = "player_aliases.csv";
    pub const TOURNAMENTS: &'static str = "dim_tournaments.csv";
    pub const TOURNAMENT_ALIASES: &'static str = "tournament_aliases.csv";
    pub const MATCHES: &'static str = "tennis_master_matches.csv";
    pub const MATCHES_WITH_FUTURES: &'static str = "tennis_master_matches_futures_included.csv";
    pub const FUTURES_ONLY: &'static str = "tennis_master_matches_futures_only.csv";
    pub const POINTS: &'static str = "tennis_master_points.csv";
    pub const SHOTS: &'static str = "tennis_master_shots.csv";
    pub const REPORT: &'static str = "build_report.json";
}

//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tennis_model::BuildConfig;

#[derive(Parser)]
#[command(
    name = "tennis-master",
    version,
    about = "Tennis Master - integrate tour, futures, Grand Slam and charting data",
    long_about = "Integrate the ATP, WTA, Grand Slam point-by-point and Match Charting Project\n\
                  archives into canonical player, tournament and match tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build manifests, dimensions and master outputs.
    Build(BuildArgs),

    /// Build only the futures match table.
    FuturesOnly(PathArgs),

    /// Inventory the data root into manifest.csv.
    Manifest(PathArgs),
}

#[derive(Args)]
pub struct PathArgs {
    /// Directory holding tennis_atp/, tennis_wta/ and the other archives.
    #[arg(long = "data-root", value_name = "DIR")]
    pub data_root: PathBuf,

    /// Output directory (created if missing).
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Worker threads for file reads (default: available parallelism).
    #[arg(long = "threads", value_name = "N")]
    pub threads: Option<usize>,
}

impl PathArgs {
    pub fn config(&self) -> BuildConfig {
        BuildConfig::new(&self.data_root, &self.out_dir).with_threads(self.threads)
    }
}

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub paths: PathArgs,

    /// Also build the futures-included and futures-only match tables.
    #[arg(long = "with-futures")]
    pub with_futures: bool,

    /// Rows read per year-file when deriving tournaments.
    #[arg(long = "scan-cap", value_name = "ROWS")]
    pub scan_cap: Option<usize>,
}

impl BuildArgs {
    pub fn config(&self) -> BuildConfig {
        let config = self.paths.config();
        match self.scan_cap {
            Some(cap) => config.with_tournament_scan_cap(cap),
            None => config,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_flags_reach_config() {
        let cli = Cli::try_parse_from([
            "tennis-master",
            "build",
            "--data-root",
            "data",
            "--out-dir",
            "out",
            "--with-futures",
            "--scan-cap",
            "50",
            "--threads",
            "2",
        ])
        .unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert!(args.with_futures);
        let config = args.config();
        assert_eq!(config.tournament_scan_cap, 50);
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn paths_are_required() {
        assert!(Cli::try_parse_from(["tennis-master", "manifest", "--data-root", "data"]).is_err());
    }
}

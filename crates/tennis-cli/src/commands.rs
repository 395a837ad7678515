use anyhow::Result;
use tracing::info_span;

use tennis_cli::pipeline::{run_build, run_futures_only, run_manifest};
use tennis_cli::types::{BuildReport, FuturesSummary};

use crate::cli::{BuildArgs, PathArgs};

pub fn build(args: &BuildArgs) -> Result<BuildReport> {
    run_build(&args.config(), args.with_futures)
}

pub fn futures_only(args: &PathArgs) -> Result<FuturesSummary> {
    let _guard = info_span!("futures_only").entered();
    run_futures_only(&args.config())
}

pub fn manifest(args: &PathArgs) -> Result<BuildReport> {
    let _guard = info_span!("manifest").entered();
    run_manifest(&args.config())
}

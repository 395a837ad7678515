//! Library half of the `tennis-master` binary: logging setup and build orchestration.

pub mod logging;
pub mod pipeline;
pub mod types;

//! Cross-source entity resolution and match integration.
//!
//! - [`players`]: merges the ATP and WTA player registries into one dimension
//!   plus a source-id alias table
//! - [`tournaments`]: derives the tournament dimension from tour match files
//!   and collects id-less aliases from Grand Slam and charting file names
//! - [`matches`]: loads, canonicalizes and unions tour and futures matches
//! - [`slam`]: projects Grand Slam point-by-point summaries onto match rows
//! - [`flags`]: point and shot availability flags
//! - [`points`]: point-level and shot-level pass-through tables
//!
//! Every stage takes the [`tennis_model::BuildConfig`] explicitly and returns
//! new tables; nothing is shared between stages.

pub mod error;
pub mod flags;
pub mod matches;
pub mod players;
pub mod points;
pub mod scan;
pub mod slam;
pub mod tournaments;

pub use error::{CoreError, Result};
pub use flags::{flag_mcp_shots, flag_slam_points};
pub use matches::{integrate_futures, integrate_tour_matches};
pub use players::{PlayerTables, build_players, resolve_players};
pub use points::{PointTables, build_point_tables};
pub use scan::FileScanner;
pub use slam::{load_slam_matches, union_slam_matches};
pub use tournaments::{TournamentTables, build_tournaments};

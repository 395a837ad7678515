//! Canonicalization primitives and column-level enrichment.
//!
//! # Overview
//!
//! - **Names**: diacritic folding and title casing ([`normalize_name`])
//! - **Identity**: deterministic short hashes for players and matches ([`stable_id`], [`match_id`])
//! - **Dates and scores**: decomposition of `tourney_date` and `score` ([`decompose_date`],
//!   [`split_score`])
//! - **Levels**: the per-source tournament level vocabulary ([`normalize_level`])
//! - **Execution**: rewriting those columns on a match table ([`enrich_match_fields`],
//!   [`normalize_tourney_level`])
//!
//! The per-value functions are pure; only the executor touches DataFrames.

mod error;
mod executor;

pub mod date;
pub mod identity;
pub mod level;
pub mod score;
pub mod text;

pub use date::{DateParts, decompose_date};
pub use error::NormalizationError;
pub use executor::{enrich_match_fields, normalize_tourney_level};
pub use identity::{match_id, slam_match_id, stable_id};
pub use level::{UNKNOWN_LEVEL, normalize_level};
pub use score::{MAX_SETS, split_score};
pub use text::normalize_name;

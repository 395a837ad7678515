//! Source tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A data provider whose rows flow through the pipeline.
///
/// The string form is what lands in the `source` column of every output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// ATP main tour (including qualifying and challenger files).
    Atp,
    /// WTA main tour (including qualifying and ITF files).
    Wta,
    /// ATP futures file series.
    AtpFutures,
    /// Grand Slam point-by-point archive.
    SlamPbp,
    /// Match Charting Project (shot-level annotations).
    Mcp,
}

impl Source {
    /// The two tour sources, in the order their rows are concatenated.
    pub const TOURS: [Source; 2] = [Source::Atp, Source::Wta];

    /// Tag written to the `source` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Source::Atp => "atp",
            Source::Wta => "wta",
            Source::AtpFutures => "atp_futures",
            Source::SlamPbp => "slam_pbp",
            Source::Mcp => "mcp",
        }
    }

    /// Parses a `source` column value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "atp" => Some(Source::Atp),
            "wta" => Some(Source::Wta),
            "atp_futures" => Some(Source::AtpFutures),
            "slam_pbp" => Some(Source::SlamPbp),
            "mcp" => Some(Source::Mcp),
            _ => None,
        }
    }

    /// Gender code attached to matches from this source, when the source is single-gender.
    pub const fn gender(self) -> Option<&'static str> {
        match self {
            Source::Atp | Source::AtpFutures => Some("M"),
            Source::Wta => Some("W"),
            Source::SlamPbp | Source::Mcp => None,
        }
    }

    /// File-name prefix used by the tour archives (`atp_matches_1990.csv`).
    pub const fn file_prefix(self) -> &'static str {
        match self {
            Source::Atp | Source::AtpFutures => "atp",
            Source::Wta => "wta",
            Source::SlamPbp => "slam",
            Source::Mcp => "charting",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_column_values() {
        for source in [
            Source::Atp,
            Source::Wta,
            Source::AtpFutures,
            Source::SlamPbp,
            Source::Mcp,
        ] {
            assert_eq!(Source::parse(source.as_str()), Some(source));
        }
        assert_eq!(Source::parse("itf"), None);
    }

    #[test]
    fn genders_follow_tour() {
        assert_eq!(Source::Atp.gender(), Some("M"));
        assert_eq!(Source::AtpFutures.gender(), Some("M"));
        assert_eq!(Source::Wta.gender(), Some("W"));
        assert_eq!(Source::SlamPbp.gender(), None);
    }

    #[test]
    fn serializes_as_column_value() {
        let json = serde_json::to_string(&Source::AtpFutures).expect("serialize");
        assert_eq!(json, "\"atp_futures\"");
    }
}

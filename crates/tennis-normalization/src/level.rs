//! Tournament level vocabulary.
//!
//! Raw `tourney_level` codes are only meaningful together with the source
//! that emitted them (`C` is a challenger on both tours, `D` is the Davis Cup
//! for ATP and the BJK Cup for WTA). The vocabulary is a nested table of
//! source to code to label, plus numeric prize-money rules for the ITF and
//! futures circuits.

use tennis_model::Source;

/// Label for blank or unmapped codes.
pub const UNKNOWN_LEVEL: &str = "Unknown";

/// Lowest numeric WTA code read as an ITF prize-money tier.
const ITF_MIN_PRIZE: u64 = 10;

const ATP_LEVELS: &[(&str, &str)] = &[
    ("G", "Grand Slam"),
    ("M", "ATP Tour"),
    ("A", "ATP Tour"),
    ("S", "Futures"),
    ("C", "Challengers"),
    ("D", "Davis Cup"),
    ("F", "Tour Finals"),
    ("O", "Other"),
    ("E", "Exhibition"),
    ("J", "Juniors"),
    ("CC", "Challengers"),
];

const WTA_LEVELS: &[(&str, &str)] = &[
    ("G", "Grand Slam"),
    ("P", "WTA Tour"),
    ("PM", "WTA Tour"),
    ("I", "International"),
    ("C", "Challengers"),
    ("D", "BJK Cup"),
    ("W", "Tour Finals"),
    ("E", "Exhibition"),
    ("J", "Juniors"),
    ("CC", "Challengers"),
    ("T1", "WTA Tour"),
    ("T2", "WTA Tour"),
    ("T3", "WTA Tour"),
    ("T4", "WTA Tour"),
    ("T5", "WTA Tour"),
];

const SLAM_LEVELS: &[(&str, &str)] = &[("G", "Grand Slam")];

const VOCABULARY: &[(Source, &[(&str, &str)])] = &[
    (Source::Atp, ATP_LEVELS),
    (Source::Wta, WTA_LEVELS),
    (Source::SlamPbp, SLAM_LEVELS),
    (Source::Mcp, SLAM_LEVELS),
];

/// Maps a raw level code to its label for the given source.
///
/// Returns `None` when the code is blank or has no label for the source;
/// callers record those as [`UNKNOWN_LEVEL`].
///
/// ```
/// use tennis_model::Source;
/// use tennis_normalization::normalize_level;
///
/// assert_eq!(normalize_level(Some(Source::Atp), "G").as_deref(), Some("Grand Slam"));
/// assert_eq!(normalize_level(Some(Source::Wta), "25").as_deref(), Some("ITF $25K"));
/// assert_eq!(normalize_level(Some(Source::AtpFutures), "15").as_deref(), Some("Futures $15K"));
/// assert_eq!(normalize_level(Some(Source::Atp), "X"), None);
/// ```
pub fn normalize_level(source: Option<Source>, code: &str) -> Option<String> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    let source = source?;

    if source == Source::AtpFutures {
        return Some(match prize_money(code) {
            Some(prize) => format!("Futures ${prize}K"),
            None => "Futures".to_string(),
        });
    }

    let table = VOCABULARY
        .iter()
        .find(|(tag, _)| *tag == source)
        .map(|(_, table)| *table)?;
    if let Some((_, label)) = table.iter().find(|(raw, _)| *raw == code) {
        return Some((*label).to_string());
    }

    match source {
        Source::Wta if prize_money(code).is_some_and(|prize| prize >= ITF_MIN_PRIZE) => {
            Some(format!("ITF ${code}K"))
        }
        _ => None,
    }
}

/// Parses an all-digit code as a prize-money tier in thousands.
fn prize_money(code: &str) -> Option<u64> {
    if code.chars().all(|c| c.is_ascii_digit()) {
        code.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(source: Source, code: &str) -> Option<String> {
        normalize_level(Some(source), code)
    }

    #[test]
    fn same_code_differs_by_source() {
        assert_eq!(label(Source::Atp, "D").as_deref(), Some("Davis Cup"));
        assert_eq!(label(Source::Wta, "D").as_deref(), Some("BJK Cup"));
        assert_eq!(label(Source::Atp, "G").as_deref(), Some("Grand Slam"));
        assert_eq!(label(Source::Wta, "G").as_deref(), Some("Grand Slam"));
        assert_eq!(label(Source::SlamPbp, "G").as_deref(), Some("Grand Slam"));
    }

    #[test]
    fn wta_tiers_and_itf_prizes() {
        assert_eq!(label(Source::Wta, "T3").as_deref(), Some("WTA Tour"));
        assert_eq!(label(Source::Wta, "100").as_deref(), Some("ITF $100K"));
        assert_eq!(label(Source::Wta, "5"), None);
        assert_eq!(label(Source::Atp, "25"), None);
    }

    #[test]
    fn futures_codes() {
        assert_eq!(label(Source::AtpFutures, "10").as_deref(), Some("Futures $10K"));
        assert_eq!(label(Source::AtpFutures, "S").as_deref(), Some("Futures"));
        assert_eq!(label(Source::AtpFutures, " "), None);
    }

    #[test]
    fn blank_unknown_and_sourceless_codes() {
        assert_eq!(label(Source::Atp, ""), None);
        assert_eq!(label(Source::Atp, "Z"), None);
        assert_eq!(label(Source::Mcp, "M"), None);
        assert_eq!(normalize_level(None, "G"), None);
    }
}

//! Column rewrites on the integrated match table.
//!
//! Each stage leaves the table unchanged when its input column is absent.
//! Blank derived values are stored as nulls.

use std::collections::BTreeMap;

use polars::prelude::*;
use tennis_common::{replace_with_columns, set_string_column, string_column, string_values};
use tennis_model::Source;
use tennis_model::columns::{
    EVENT_DATE, EVENT_MONTH, EVENT_YEAR, SCORE, SET_COLUMNS, SOURCE, TOURNEY_DATE, TOURNEY_LEVEL,
};

use crate::date::decompose_date;
use crate::error::NormalizationError;
use crate::level::{UNKNOWN_LEVEL, normalize_level};
use crate::score::split_score;

/// Replaces `tourney_date` with `event_year, event_month, event_date` and
/// `score` with `set1..set5`, each at the position of the column it replaces.
pub fn enrich_match_fields(mut df: DataFrame) -> Result<DataFrame, NormalizationError> {
    if let Some(dates) = string_values(&df, TOURNEY_DATE)? {
        let mut years = Vec::with_capacity(dates.len());
        let mut months = Vec::with_capacity(dates.len());
        let mut isos = Vec::with_capacity(dates.len());
        for token in &dates {
            let parts = decompose_date(token.as_deref());
            years.push(non_empty(parts.year));
            months.push(non_empty(parts.month));
            isos.push(non_empty(parts.iso));
        }
        replace_with_columns(
            &mut df,
            TOURNEY_DATE,
            vec![
                string_column(EVENT_YEAR, years),
                string_column(EVENT_MONTH, months),
                string_column(EVENT_DATE, isos),
            ],
        )?;
    }

    if let Some(scores) = string_values(&df, SCORE)? {
        let mut slots: Vec<Vec<Option<String>>> = SET_COLUMNS
            .iter()
            .map(|_| Vec::with_capacity(scores.len()))
            .collect();
        for score in &scores {
            for (slot, set) in slots.iter_mut().zip(split_score(score.as_deref())) {
                slot.push(non_empty(set));
            }
        }
        let columns = SET_COLUMNS
            .iter()
            .zip(slots)
            .map(|(name, values)| string_column(name, values))
            .collect();
        replace_with_columns(&mut df, SCORE, columns)?;
    }

    tracing::debug!(rows = df.height(), "enriched date and score fields");
    Ok(df)
}

/// Rewrites raw `tourney_level` codes to labels using each row's `source`.
///
/// Blank and unmapped codes become `Unknown`; every distinct unmapped
/// (source, code) pair is logged once.
pub fn normalize_tourney_level(mut df: DataFrame) -> Result<DataFrame, NormalizationError> {
    let Some(levels) = string_values(&df, TOURNEY_LEVEL)? else {
        return Ok(df);
    };
    let sources = string_values(&df, SOURCE)?.unwrap_or_else(|| vec![None; levels.len()]);

    let mut unmapped: BTreeMap<(String, String), usize> = BTreeMap::new();
    let mut labels = Vec::with_capacity(levels.len());
    for (level, source) in levels.iter().zip(&sources) {
        let code = level.as_deref().unwrap_or_default();
        let tag = source.as_deref().unwrap_or_default();
        let label = match normalize_level(Source::parse(tag), code) {
            Some(label) => label,
            None => {
                *unmapped
                    .entry((tag.trim().to_string(), code.trim().to_string()))
                    .or_insert(0) += 1;
                UNKNOWN_LEVEL.to_string()
            }
        };
        labels.push(Some(label));
    }

    for ((source, code), rows) in &unmapped {
        tracing::warn!(
            source = %source,
            code = %code,
            rows,
            "tourney level has no label, recorded as Unknown"
        );
    }

    set_string_column(&mut df, TOURNEY_LEVEL, labels)?;
    Ok(df)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

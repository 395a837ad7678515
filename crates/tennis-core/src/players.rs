//! Player dimension and alias table.
//!
//! ATP and WTA registries are merged on (normalized full name, date of birth,
//! country). A key component that is missing compares equal to an empty
//! string, so two records both lacking a birth date can still merge.

use std::collections::{HashMap, HashSet};

use polars::prelude::DataFrame;
use tennis_common::{frame_from_columns, string_values};
use tennis_ingest::{ReadOptions, read_optional_csv};
use tennis_model::columns::{
    DOB, HAND, HEIGHT, IOC, NAME_FIRST, NAME_LAST, PLAYER_ALIAS_COLUMNS, PLAYER_DIM_COLUMNS,
    PLAYER_ID, WIKIDATA_ID,
};
use tennis_model::{BuildConfig, Source};
use tennis_normalization::{normalize_name, stable_id};

use crate::error::Result;

/// The player dimension and its alias table.
#[derive(Debug)]
pub struct PlayerTables {
    pub dimension: DataFrame,
    pub aliases: DataFrame,
}

/// Reads both registries from the data root and resolves them.
///
/// A missing registry contributes no players.
pub fn build_players(config: &BuildConfig) -> Result<PlayerTables> {
    let layout = config.layout();
    let options = ReadOptions::default();
    let atp = read_optional_csv(&layout.players_file(Source::Atp), &options)?;
    let wta = read_optional_csv(&layout.players_file(Source::Wta), &options)?;
    resolve_players(atp.as_ref(), wta.as_ref())
}

/// Merges ATP and WTA player frames into canonical players.
///
/// Rows come out ATP-first: every entity seen in the ATP registry in order of
/// first appearance, then WTA-only entities in order of first appearance.
pub fn resolve_players(atp: Option<&DataFrame>, wta: Option<&DataFrame>) -> Result<PlayerTables> {
    let mut registry = Registry::default();
    for (source, frame) in [(Source::Atp, atp), (Source::Wta, wta)] {
        if let Some(frame) = frame {
            for record in player_records(frame)? {
                registry.add(source, record);
            }
        }
    }
    tracing::info!(
        players = registry.entities.len(),
        "resolved player dimension"
    );
    Ok(PlayerTables {
        dimension: registry.dimension_frame()?,
        aliases: registry.alias_frame()?,
    })
}

/// One registry row, projected onto the shared attribute set.
#[derive(Debug, Clone, Default)]
struct PlayerRecord {
    native_id: Option<String>,
    name_first: Option<String>,
    name_last: Option<String>,
    hand: Option<String>,
    dob: Option<String>,
    ioc: Option<String>,
    height: Option<String>,
    wikidata_id: Option<String>,
}

impl PlayerRecord {
    fn key(&self) -> MergeKey {
        let first = normalize_name(self.name_first.as_deref());
        let last = normalize_name(self.name_last.as_deref());
        MergeKey {
            full_name: format!("{first} {last}").trim().to_string(),
            dob: self.dob.as_deref().unwrap_or_default().trim().to_string(),
            ioc: self.ioc.as_deref().unwrap_or_default().trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MergeKey {
    full_name: String,
    dob: String,
    ioc: String,
}

impl MergeKey {
    fn canonical_id(&self) -> String {
        stable_id(&[&self.full_name, &self.dob, &self.ioc])
    }
}

#[derive(Debug)]
struct Entity {
    key: MergeKey,
    atp: Option<PlayerRecord>,
    wta: Option<PlayerRecord>,
    atp_ids: Vec<String>,
    wta_ids: Vec<String>,
}

impl Entity {
    fn new(key: MergeKey) -> Self {
        Self {
            key,
            atp: None,
            wta: None,
            atp_ids: Vec::new(),
            wta_ids: Vec::new(),
        }
    }

    /// ATP value first, WTA as fallback.
    fn prefer(&self, get: impl Fn(&PlayerRecord) -> Option<&String>) -> Option<String> {
        self.atp
            .as_ref()
            .and_then(&get)
            .or_else(|| self.wta.as_ref().and_then(&get))
            .cloned()
    }
}

#[derive(Debug, Default)]
struct Registry {
    entities: Vec<Entity>,
    by_key: HashMap<MergeKey, usize>,
    seen_atp: HashSet<String>,
    seen_wta: HashSet<String>,
}

impl Registry {
    fn add(&mut self, source: Source, record: PlayerRecord) {
        let key = record.key();
        let index = match self.by_key.get(&key) {
            Some(index) => *index,
            None => {
                self.entities.push(Entity::new(key.clone()));
                self.by_key.insert(key, self.entities.len() - 1);
                self.entities.len() - 1
            }
        };

        let native_id = record
            .native_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        let entity = &mut self.entities[index];
        let (slot, ids, seen) = match source {
            Source::Wta => (&mut entity.wta, &mut entity.wta_ids, &mut self.seen_wta),
            _ => (&mut entity.atp, &mut entity.atp_ids, &mut self.seen_atp),
        };
        if slot.is_none() {
            *slot = Some(record);
        }
        if let Some(id) = native_id
            && seen.insert(id.clone())
        {
            ids.push(id);
        }
    }

    fn dimension_frame(&self) -> Result<DataFrame> {
        let mut columns: Vec<Vec<Option<String>>> = PLAYER_DIM_COLUMNS
            .iter()
            .map(|_| Vec::with_capacity(self.entities.len()))
            .collect();
        for entity in &self.entities {
            let row = [
                Some(entity.key.canonical_id()),
                non_empty(&entity.key.full_name),
                entity.prefer(|r| r.name_first.as_ref()),
                entity.prefer(|r| r.name_last.as_ref()),
                entity.prefer(|r| r.hand.as_ref()),
                non_empty(&entity.key.dob),
                non_empty(&entity.key.ioc),
                entity.prefer(|r| r.height.as_ref()),
                entity.prefer(|r| r.wikidata_id.as_ref()),
                entity.atp_ids.first().cloned(),
                entity.wta_ids.first().cloned(),
            ];
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }
        let df = frame_from_columns(PLAYER_DIM_COLUMNS.iter().copied().zip(columns).collect())?;
        Ok(df)
    }

    fn alias_frame(&self) -> Result<DataFrame> {
        let mut canonical_ids = Vec::new();
        let mut sources = Vec::new();
        let mut source_ids = Vec::new();
        for source in Source::TOURS {
            for entity in &self.entities {
                let ids = match source {
                    Source::Wta => &entity.wta_ids,
                    _ => &entity.atp_ids,
                };
                for id in ids {
                    canonical_ids.push(Some(entity.key.canonical_id()));
                    sources.push(Some(source.as_str().to_string()));
                    source_ids.push(Some(id.clone()));
                }
            }
        }
        let [id_column, source_column, source_id_column] = PLAYER_ALIAS_COLUMNS;
        let df = frame_from_columns(vec![
            (id_column, canonical_ids),
            (source_column, sources),
            (source_id_column, source_ids),
        ])?;
        Ok(df)
    }
}

fn player_records(df: &DataFrame) -> Result<Vec<PlayerRecord>> {
    let height = df.height();
    let column = |name: &str| -> Result<Vec<Option<String>>> {
        Ok(string_values(df, name)?.unwrap_or_else(|| vec![None; height]))
    };
    let ids = column(PLAYER_ID)?;
    let firsts = column(NAME_FIRST)?;
    let lasts = column(NAME_LAST)?;
    let hands = column(HAND)?;
    let dobs = column(DOB)?;
    let iocs = column(IOC)?;
    let heights = column(HEIGHT)?;
    let wikidata = column(WIKIDATA_ID)?;

    let records = (0..height)
        .map(|idx| PlayerRecord {
            native_id: ids[idx].clone(),
            name_first: firsts[idx].clone(),
            name_last: lasts[idx].clone(),
            hand: hands[idx].clone(),
            dob: dobs[idx].clone(),
            ioc: iocs[idx].clone(),
            height: heights[idx].clone(),
            wikidata_id: wikidata[idx].clone(),
        })
        .collect();
    Ok(records)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

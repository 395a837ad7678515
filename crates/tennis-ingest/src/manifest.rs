//! Dataset manifest: an inventory of every CSV under the data root.

use std::path::{Component, Path};

use polars::prelude::DataFrame;
use tennis_common::frame_from_columns;
use tennis_model::columns::MANIFEST_COLUMNS;
use walkdir::WalkDir;

use crate::error::{IngestError, Result};

/// Directory name skipped during the scan, in case outputs were written inside the data root.
const OUTPUTS_DIR: &str = "outputs";

/// One discovered CSV file and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub source: &'static str,
    pub domain: &'static str,
    pub kind: &'static str,
    pub rel_path: String,
    pub abs_path: String,
    pub file_name: String,
    pub size_bytes: u64,
}

/// Scans `root` recursively for `*.csv` files.
///
/// Entries are sorted by (source, kind, file name), ties broken by relative path.
pub fn build_manifest(root: &Path) -> Result<Vec<ManifestEntry>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| IngestError::Walk {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(path);
        let dirs = lowercase_components(rel);
        if dirs.iter().any(|part| part == OUTPUTS_DIR) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        let (source, domain) = classify_source(&dirs);
        let kind = classify_kind(&file_name.to_lowercase());
        let size_bytes = entry
            .metadata()
            .map_err(|e| IngestError::Walk {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
            .len();
        let abs_path = std::fs::canonicalize(path)
            .unwrap_or_else(|_| path.to_path_buf())
            .display()
            .to_string();

        entries.push(ManifestEntry {
            source,
            domain,
            kind,
            rel_path: rel.display().to_string(),
            abs_path,
            file_name,
            size_bytes,
        });
    }

    entries.sort_by(|a, b| {
        (a.source, a.kind, &a.file_name, &a.rel_path).cmp(&(
            b.source,
            b.kind,
            &b.file_name,
            &b.rel_path,
        ))
    });
    tracing::debug!(root = %root.display(), files = entries.len(), "built dataset manifest");
    Ok(entries)
}

/// Converts manifest entries into the `manifest` table.
pub fn manifest_frame(entries: &[ManifestEntry]) -> Result<DataFrame> {
    let column = |get: fn(&ManifestEntry) -> String| -> Vec<Option<String>> {
        entries.iter().map(|entry| Some(get(entry))).collect()
    };
    let values = vec![
        column(|e| e.source.to_string()),
        column(|e| e.domain.to_string()),
        column(|e| e.kind.to_string()),
        column(|e| e.rel_path.clone()),
        column(|e| e.abs_path.clone()),
        column(|e| e.file_name.clone()),
        column(|e| e.size_bytes.to_string()),
    ];
    let df = frame_from_columns(MANIFEST_COLUMNS.iter().copied().zip(values).collect())?;
    Ok(df)
}

fn lowercase_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().to_lowercase()),
            _ => None,
        })
        .collect()
}

/// Source and domain from the archive directory a file lives in.
fn classify_source(parts: &[String]) -> (&'static str, &'static str) {
    const SOURCES: [(&str, &str, &str); 4] = [
        ("tennis_atp", "atp", "tour"),
        ("tennis_wta", "wta", "tour"),
        ("tennis_slam_pointbypoint", "slam_pbp", "grand_slam"),
        ("tennis_matchchartingproject", "mcp", "charting"),
    ];
    SOURCES
        .iter()
        .find(|(dir, _, _)| parts.iter().any(|part| part == dir))
        .map_or(("unknown", "unknown"), |(_, source, domain)| {
            (*source, *domain)
        })
}

/// Kind from the file name; the first keyword found wins.
fn classify_kind(file_name: &str) -> &'static str {
    const KINDS: [&str; 4] = ["points", "matches", "players", "rankings"];
    KINDS
        .into_iter()
        .find(|kind| file_name.contains(kind))
        .unwrap_or("other")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn classifies_and_sorts() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "tennis_wta/wta_players.csv", "player_id\n");
        touch(dir.path(), "tennis_atp/atp_matches_1990.csv", "tourney_id\n");
        touch(dir.path(), "tennis_atp/atp_players.csv", "player_id\n");
        touch(
            dir.path(),
            "tennis_MatchChartingProject/charting-m-points-2010s.csv",
            "match_id\n",
        );
        touch(dir.path(), "tennis_slam_pointbypoint/2019-wimbledon-matches.csv", "slam\n");
        touch(dir.path(), "misc/readme.csv", "x\n");
        touch(dir.path(), "tennis_atp/outputs/dim_players.csv", "x\n");
        touch(dir.path(), "tennis_atp/notes.txt", "x\n");

        let entries = build_manifest(dir.path()).unwrap();
        let summary: Vec<(&str, &str, &str, &str)> = entries
            .iter()
            .map(|e| (e.source, e.domain, e.kind, e.file_name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("atp", "tour", "matches", "atp_matches_1990.csv"),
                ("atp", "tour", "players", "atp_players.csv"),
                ("mcp", "charting", "points", "charting-m-points-2010s.csv"),
                ("slam_pbp", "grand_slam", "matches", "2019-wimbledon-matches.csv"),
                ("unknown", "unknown", "other", "readme.csv"),
                ("wta", "tour", "players", "wta_players.csv"),
            ]
        );
        assert_eq!(entries[0].size_bytes, "tourney_id\n".len() as u64);
        assert!(entries[0].rel_path.ends_with("atp_matches_1990.csv"));
    }

    #[test]
    fn frame_has_manifest_columns() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "tennis_atp/atp_rankings_current.csv", "ranking_date\n");
        let entries = build_manifest(dir.path()).unwrap();
        let df = manifest_frame(&entries).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, MANIFEST_COLUMNS);
        assert_eq!(df.height(), 1);
    }
}

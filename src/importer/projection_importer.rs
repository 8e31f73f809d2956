// ==========================================
// Sorare MLB Optimizer - projection importer
// ==========================================
// Reads per-game projection rows and accumulates them into per-player
// totals. Multiple rows for the same (player, team) sum; the solver
// only ever sees the aggregate.
//
// Expected columns: player_name, team_id, sorare_score
// ==========================================

use crate::domain::ProjectionTable;
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

const REQUIRED_COLUMNS: [&str; 2] = ["player_name", "sorare_score"];

#[derive(Debug, Deserialize)]
struct RawProjectionRow {
    player_name: String,
    #[serde(default)]
    team_id: String,
    sorare_score: String,
}

// ==========================================
// ProjectionImporter
// ==========================================
pub struct ProjectionImporter;

impl ProjectionImporter {
    pub fn new() -> Self {
        Self
    }

    /// Import projections, summing rows per (player, team). Rows with a
    /// blank name or an unparseable score are skipped.
    pub fn import<P: AsRef<Path>>(&self, path: P) -> ImportResult<ProjectionTable> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ImportError::MissingColumn(column.to_string()));
            }
        }

        let mut table = ProjectionTable::new();
        let mut skipped = 0_usize;

        for (idx, result) in reader.deserialize::<RawProjectionRow>().enumerate() {
            let row_no = idx + 1;
            let raw = match result {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(row = row_no, %err, "projection row skipped");
                    skipped += 1;
                    continue;
                }
            };
            if raw.player_name.is_empty() {
                skipped += 1;
                continue;
            }
            let score: f64 = match raw.sorare_score.parse() {
                Ok(score) => score,
                Err(_) => {
                    warn!(row = row_no, value = %raw.sorare_score, "invalid projection score");
                    skipped += 1;
                    continue;
                }
            };
            let team_id = match raw.team_id.as_str() {
                "" => None,
                value => match value.parse::<i32>() {
                    Ok(id) if id >= 0 => Some(id),
                    _ => None,
                },
            };
            table.add(&raw.player_name, team_id, score);
        }

        info!(
            path = %path.display(),
            players = table.len(),
            skipped,
            "projections imported"
        );
        Ok(table)
    }
}

impl Default for ProjectionImporter {
    fn default() -> Self {
        Self::new()
    }
}

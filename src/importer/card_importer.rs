// ==========================================
// Sorare MLB Optimizer - card feed importer
// ==========================================
// Reads the exported card feed CSV into domain cards. Bad rows never
// abort an import: they are skipped with a per-row reason collected in
// the import report.
//
// Expected columns: slug, name, year, rarity, positions, team_id, sealed
// ==========================================

use crate::domain::types::Rarity;
use crate::domain::Card;
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

/// Slug fragment that triggers the DH-only positions override. The feed
/// lists pitching tags for this player's two-way cards, but only his
/// hitting appearances score.
const SHOHEI_SLUG_FRAGMENT: &str = "shohei-ohtani";

const REQUIRED_COLUMNS: [&str; 5] = ["slug", "name", "year", "rarity", "positions"];

#[derive(Debug, Deserialize)]
struct RawCardRow {
    slug: String,
    name: String,
    year: String,
    rarity: String,
    positions: String,
    #[serde(default)]
    team_id: String,
    #[serde(default)]
    sealed: String,
}

/// One skipped feed row and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub reason: String,
}

/// Outcome of one card import.
#[derive(Debug)]
pub struct CardImport {
    pub cards: Vec<Card>,
    pub skipped: Vec<SkippedRow>,
}

// ==========================================
// CardImporter
// ==========================================
pub struct CardImporter;

impl CardImporter {
    pub fn new() -> Self {
        Self
    }

    /// Import a card feed CSV. File-level problems (missing file, bad
    /// header) are errors; row-level problems are skips.
    pub fn import<P: AsRef<Path>>(&self, path: P) -> ImportResult<CardImport> {
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

        let mut cards = Vec::new();
        let mut skipped = Vec::new();

        for (idx, result) in reader.deserialize::<RawCardRow>().enumerate() {
            let row_no = idx + 1;
            let raw = match result {
                Ok(raw) => raw,
                Err(err) => {
                    skipped.push(SkippedRow {
                        row: row_no,
                        reason: format!("row parse failed: {err}"),
                    });
                    continue;
                }
            };

            match Self::convert_row(&raw) {
                Ok(Some(card)) => cards.push(card),
                Ok(None) => {} // blank row
                Err(reason) => {
                    warn!(row = row_no, %reason, "card row skipped");
                    skipped.push(SkippedRow {
                        row: row_no,
                        reason,
                    });
                }
            }
        }

        if cards.is_empty() && skipped.is_empty() {
            return Err(ImportError::EmptyFile(path.display().to_string()));
        }

        info!(
            path = %path.display(),
            imported = cards.len(),
            skipped = skipped.len(),
            "card feed imported"
        );
        Ok(CardImport { cards, skipped })
    }

    fn convert_row(raw: &RawCardRow) -> Result<Option<Card>, String> {
        if raw.slug.is_empty()
            && raw.name.is_empty()
            && raw.year.is_empty()
            && raw.rarity.is_empty()
        {
            return Ok(None);
        }
        if raw.slug.is_empty() {
            return Err("missing slug".to_string());
        }
        if raw.name.is_empty() {
            return Err("missing player name".to_string());
        }

        let year: i32 = raw
            .year
            .parse()
            .map_err(|_| format!("invalid year: {:?}", raw.year))?;
        let rarity =
            Rarity::parse(&raw.rarity).ok_or_else(|| format!("invalid rarity: {:?}", raw.rarity))?;

        // The feed marks "no team" as blank or -1.
        let team_id = match raw.team_id.as_str() {
            "" => None,
            value => match value.parse::<i32>() {
                Ok(id) if id >= 0 => Some(id),
                Ok(_) => None,
                Err(_) => return Err(format!("invalid team_id: {value:?}")),
            },
        };

        let sealed = matches!(raw.sealed.to_lowercase().as_str(), "true" | "t" | "1");

        let positions = if raw.slug.contains(SHOHEI_SLUG_FRAGMENT) {
            Card::parse_positions("baseball_designated_hitter")
        } else {
            Card::parse_positions(&raw.positions)
        };

        Ok(Some(Card {
            slug: raw.slug.clone(),
            player_name: raw.name.clone(),
            year,
            rarity,
            positions,
            team_id,
            sealed,
        }))
    }
}

impl Default for CardImporter {
    fn default() -> Self {
        Self::new()
    }
}

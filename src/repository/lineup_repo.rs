// ==========================================
// Sorare MLB Optimizer - lineup repository
// ==========================================
// Persistence for generated lineups, one row per (username, game_week,
// lineup_type). Saving a run replaces that user's rows for the game
// week; list fields are stored as JSON text columns.
// No business logic in this layer.
// ==========================================

use crate::config::OptimizerConfig;
use crate::db::open_sqlite_connection;
use crate::domain::types::Slot;
use crate::domain::{EnergyUsed, Lineup};
use crate::engine::AllocationRun;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

/// One persisted lineup row.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredLineup {
    pub lineup_type: String,
    pub cards: Vec<String>,
    pub slot_assignments: Vec<Slot>,
    pub projections: Vec<f64>,
    pub projected_score: f64,
    pub energy_used: EnergyUsed,
}

impl StoredLineup {
    pub fn to_lineup(&self) -> Lineup {
        Lineup {
            cards: self.cards.clone(),
            slot_assignments: self.slot_assignments.clone(),
            projections: self.projections.clone(),
            projected_score: self.projected_score,
            energy_used: self.energy_used,
        }
    }
}

// ==========================================
// LineupRepository
// ==========================================
pub struct LineupRepository {
    conn: Arc<Mutex<Connection>>,
}

impl LineupRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        let repo = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        repo.ensure_schema()?;
        Ok(repo)
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let repo = Self { conn };
        repo.ensure_schema()?;
        Ok(repo)
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn ensure_schema(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS lineups (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL,
                game_week TEXT NOT NULL,
                lineup_type TEXT NOT NULL,
                cards TEXT NOT NULL,
                slot_assignments TEXT NOT NULL,
                projections TEXT NOT NULL,
                projected_score REAL NOT NULL,
                energy_used TEXT NOT NULL,
                boost_2025 REAL NOT NULL,
                stack_boost REAL NOT NULL,
                energy_per_card INTEGER NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now')),
                UNIQUE (username, game_week, lineup_type)
            );
            CREATE INDEX IF NOT EXISTS idx_username_gameweek
                ON lineups (username, game_week);
            "#,
        )?;
        Ok(())
    }

    /// Persist one allocation run, replacing any earlier rows for the
    /// same user and game week. Empty lineups are not stored.
    pub fn save_run(
        &self,
        username: &str,
        game_week: &str,
        run: &AllocationRun,
        config: &OptimizerConfig,
    ) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let deleted = tx.execute(
            "DELETE FROM lineups WHERE username = ?1 AND game_week = ?2",
            params![username, game_week],
        )?;

        let mut inserted = 0_usize;
        for result in &run.results {
            if result.lineup.is_empty() {
                continue;
            }
            tx.execute(
                r#"
                INSERT INTO lineups (
                    username, game_week, lineup_type, cards, slot_assignments,
                    projections, projected_score, energy_used, boost_2025,
                    stack_boost, energy_per_card
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                "#,
                params![
                    username,
                    game_week,
                    result.contest.name,
                    serde_json::to_string(&result.lineup.cards)?,
                    serde_json::to_string(&result.lineup.slot_assignments)?,
                    serde_json::to_string(&result.lineup.projections)?,
                    result.lineup.projected_score,
                    serde_json::to_string(&result.lineup.energy_used)?,
                    config.boost_2025,
                    config.stack_boost,
                    config.energy_per_card,
                ],
            )?;
            inserted += 1;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        info!(username, game_week, deleted, inserted, "lineup run saved");
        Ok(inserted)
    }

    /// Card slugs committed to this game week's weekly lineups. Daily
    /// contest rows (Derby/Swing) do not block daily reuse.
    pub fn used_card_slugs(
        &self,
        username: &str,
        game_week: &str,
    ) -> RepositoryResult<HashSet<String>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT cards FROM lineups
            WHERE username = ?1 AND game_week = ?2
              AND lineup_type NOT LIKE '%Derby%'
              AND lineup_type NOT LIKE '%Swing%'
            "#,
        )?;

        let mut used = HashSet::new();
        let rows = stmt.query_map(params![username, game_week], |row| {
            row.get::<_, String>(0)
        })?;
        for row in rows {
            let cards: Vec<String> = serde_json::from_str(&row?)?;
            used.extend(cards);
        }
        Ok(used)
    }

    /// All stored lineups for a user and game week, in insertion order.
    pub fn list(&self, username: &str, game_week: &str) -> RepositoryResult<Vec<StoredLineup>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT lineup_type, cards, slot_assignments, projections,
                   projected_score, energy_used
            FROM lineups
            WHERE username = ?1 AND game_week = ?2
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map(params![username, game_week], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut lineups = Vec::new();
        for row in rows {
            let (lineup_type, cards, slots, projections, projected_score, energy) = row?;
            lineups.push(StoredLineup {
                lineup_type,
                cards: serde_json::from_str(&cards)?,
                slot_assignments: serde_json::from_str(&slots)?,
                projections: serde_json::from_str(&projections)?,
                projected_score,
                energy_used: serde_json::from_str(&energy)?,
            });
        }
        Ok(lineups)
    }
}

// ==========================================
// Sorare MLB Optimizer - projection table
// ==========================================
// Scalar fantasy-score projections per (player, team) for one scoring
// period. A missing entry is a domain signal ("do not select"), not an
// error: lookups default to 0.0.
// ==========================================

use std::collections::{HashMap, HashSet};

/// Aggregated projections for one game week (or one day, for daily
/// contests). At most one total value per (player_name, team_id);
/// repeated inserts accumulate, mirroring the per-game rows the
/// projection pipeline emits.
#[derive(Debug, Clone, Default)]
pub struct ProjectionTable {
    by_player_team: HashMap<(String, Option<i32>), f64>,
    player_names: HashSet<String>,
}

impl ProjectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a projection row. Values for the same (player, team)
    /// accumulate into a single total.
    pub fn add(&mut self, player_name: &str, team_id: Option<i32>, projection: f64) {
        *self
            .by_player_team
            .entry((player_name.to_string(), team_id))
            .or_insert(0.0) += projection;
        self.player_names.insert(player_name.to_string());
    }

    /// Total projection for a (player, team). Missing entries are 0.0.
    pub fn get(&self, player_name: &str, team_id: Option<i32>) -> f64 {
        self.by_player_team
            .get(&(player_name.to_string(), team_id))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether any team of this player has a projection row. Used by
    /// the missing-projections report, which matches on name only.
    pub fn has_player(&self, player_name: &str) -> bool {
        self.player_names.contains(player_name)
    }

    pub fn len(&self) -> usize {
        self.by_player_team.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_player_team.is_empty()
    }
}

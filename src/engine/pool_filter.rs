// ==========================================
// Sorare MLB Optimizer - card pool filter
// ==========================================
// Derives the candidate pool for one contest: drop sealed and already
// committed cards, apply the contest's rarity rule, attach projections
// and the year-based selection boost. Returns a filtered copy; no side
// effects, deterministic for a fixed input.
// ==========================================

use crate::config::{ContestType, OptimizerConfig};
use crate::domain::{Card, ProjectionTable};
use std::collections::HashSet;
use tracing::debug;

/// A card enriched with its projections for one contest.
///
/// `selection_projection` (base + any year boost) drives the solver's
/// objective; `base_projection` is what lineups report. The split is
/// deliberate: boosts influence which cards are picked, never the
/// projected score shown to the user.
#[derive(Debug, Clone)]
pub struct PoolCard {
    pub card: Card,
    pub base_projection: f64,
    pub selection_projection: f64,
}

// ==========================================
// CardPoolFilter - stateless filter engine
// ==========================================
pub struct CardPoolFilter;

impl CardPoolFilter {
    pub fn new() -> Self {
        Self
    }

    /// Build the candidate pool for a contest.
    ///
    /// Exclusion rules, in order: sealed cards, cards already used in
    /// this allocation run, cards outside the contest's allowed
    /// rarities. Remaining cards get their (player, team) projection,
    /// defaulting to 0.0, plus the 2025 boost when the contest is
    /// boost-eligible. Feasibility is not decided here; an undersized
    /// pool simply yields an undersized vector.
    pub fn filter_and_boost(
        &self,
        pool: &[Card],
        projections: &ProjectionTable,
        contest: &ContestType,
        used_slugs: &HashSet<String>,
        config: &OptimizerConfig,
    ) -> Vec<PoolCard> {
        let candidates: Vec<PoolCard> = pool
            .iter()
            .filter(|card| !card.sealed)
            .filter(|card| !used_slugs.contains(&card.slug))
            .filter(|card| contest.allowed_rarities.contains(&card.rarity))
            .map(|card| {
                let base = projections.get(&card.player_name, card.team_id);
                let boosted = if contest.boost_eligible && card.year == 2025 {
                    base + config.boost_2025
                } else {
                    base
                };
                PoolCard {
                    card: card.clone(),
                    base_projection: base,
                    selection_projection: boosted,
                }
            })
            .collect();

        debug!(
            contest = %contest.name,
            pool_size = pool.len(),
            candidates = candidates.len(),
            "card pool filtered"
        );

        candidates
    }

    /// Drop cards for ignored player names (case-insensitive). Applied
    /// once per run, before any contest is processed.
    pub fn apply_ignore_list(pool: &[Card], ignore_players: &[String]) -> Vec<Card> {
        if ignore_players.is_empty() {
            return pool.to_vec();
        }
        let ignored: HashSet<String> = ignore_players
            .iter()
            .map(|name| name.trim().to_uppercase())
            .filter(|name| !name.is_empty())
            .collect();
        pool.iter()
            .filter(|card| !ignored.contains(&card.player_name.to_uppercase()))
            .cloned()
            .collect()
    }
}

impl Default for CardPoolFilter {
    fn default() -> Self {
        Self::new()
    }
}

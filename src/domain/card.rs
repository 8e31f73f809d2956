// ==========================================
// Sorare MLB Optimizer - card entity
// ==========================================
// A user-owned collectible tied to a real player. Cards are produced
// by the card feed importer and are read-only to the engines.
// ==========================================

use crate::domain::types::{Position, Rarity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single owned card.
///
/// `slug` is globally unique. `player_name` may repeat across physical
/// cards (different years/rarities of the same player); player identity
/// for lineup purposes is `(player_name, team_id)`, not the slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub slug: String,
    pub player_name: String,
    pub year: i32,
    pub rarity: Rarity,
    /// Recognized position tags. Empty means the card is ineligible for
    /// every slot, including flex.
    pub positions: BTreeSet<Position>,
    /// None when the player has no current team mapping.
    pub team_id: Option<i32>,
    /// Sealed cards are excluded from lineup eligibility entirely.
    pub sealed: bool,
}

impl Card {
    /// Identity used for the one-card-per-player constraint.
    pub fn player_key(&self) -> PlayerKey {
        PlayerKey {
            player_name: self.player_name.clone(),
            team_id: self.team_id,
        }
    }

    /// Parse a comma-separated feed string ("baseball_catcher,
    /// baseball_designated_hitter") into a position set. Unrecognized
    /// tags are dropped; malformed input degrades to an empty set.
    pub fn parse_positions(raw: &str) -> BTreeSet<Position> {
        raw.split(',').filter_map(Position::parse_tag).collect()
    }
}

/// Player identity: name plus team. Two cards of the same player on the
/// same team collide; a genuine mid-season team change yields distinct
/// keys and is treated as distinct players on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerKey {
    pub player_name: String,
    pub team_id: Option<i32>,
}

// ==========================================
// Sorare MLB Optimizer - lineup result and energy accounting
// ==========================================
// The solver's output for one contest plus the two depletable energy
// counters shared across an allocation run.
// ==========================================

use crate::domain::types::{Rarity, Slot};
use serde::{Deserialize, Serialize};

// ==========================================
// Energy
// ==========================================

/// Energy consumed by one lineup, split by rarity. Common cards never
/// consume energy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyUsed {
    pub rare: i64,
    pub limited: i64,
}

impl EnergyUsed {
    pub fn total(&self) -> i64 {
        self.rare + self.limited
    }

    pub fn add(&mut self, rarity: Rarity, amount: i64) {
        match rarity {
            Rarity::Rare => self.rare += amount,
            Rarity::Limited => self.limited += amount,
            Rarity::Common => {}
        }
    }

    pub fn for_rarity(&self, rarity: Rarity) -> i64 {
        match rarity {
            Rarity::Rare => self.rare,
            Rarity::Limited => self.limited,
            Rarity::Common => 0,
        }
    }
}

/// Running per-rarity energy counters for an allocation run.
/// Invariant: counters never go negative; the solver refuses any
/// assignment that would overdraw, and `charge` rejects overdrafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyBudget {
    pub rare: i64,
    pub limited: i64,
}

impl Default for EnergyBudget {
    fn default() -> Self {
        Self {
            rare: 50,
            limited: 50,
        }
    }
}

impl EnergyBudget {
    pub fn new(rare: i64, limited: i64) -> Self {
        Self { rare, limited }
    }

    /// Remaining energy for a rarity. Common has no energy pool and
    /// always reads 0.
    pub fn remaining(&self, rarity: Rarity) -> i64 {
        match rarity {
            Rarity::Rare => self.rare,
            Rarity::Limited => self.limited,
            Rarity::Common => 0,
        }
    }

    /// Deduct a lineup's consumption. Returns false (and leaves the
    /// budget untouched) if the deduction would overdraw either pool.
    pub fn charge(&mut self, used: &EnergyUsed) -> bool {
        if used.rare > self.rare || used.limited > self.limited {
            return false;
        }
        self.rare -= used.rare;
        self.limited -= used.limited;
        true
    }
}

// ==========================================
// Lineup
// ==========================================

/// One contest's assignment. The four list fields are positionally
/// aligned and equal in length; a lineup is either complete (every
/// required slot filled exactly once) or entirely empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub cards: Vec<String>,
    pub slot_assignments: Vec<Slot>,
    /// Raw (unboosted) projections, positionally aligned with `cards`.
    pub projections: Vec<f64>,
    pub projected_score: f64,
    pub energy_used: EnergyUsed,
}

impl Lineup {
    /// The "no lineup" result for an infeasible contest.
    pub fn empty() -> Self {
        Self {
            cards: Vec::new(),
            slot_assignments: Vec::new(),
            projections: Vec::new(),
            projected_score: 0.0,
            energy_used: EnergyUsed::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

/// Round to the 2-decimal precision used for reported scores.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lineup() {
        let lineup = Lineup::empty();
        assert!(lineup.is_empty());
        assert_eq!(lineup.projected_score, 0.0);
        assert_eq!(lineup.energy_used.total(), 0);
    }

    #[test]
    fn test_budget_charge_exact_to_zero() {
        let mut budget = EnergyBudget::new(25, 50);
        let used = EnergyUsed {
            rare: 25,
            limited: 0,
        };
        assert!(budget.charge(&used));
        assert_eq!(budget.remaining(Rarity::Rare), 0);
        assert_eq!(budget.remaining(Rarity::Limited), 50);
    }

    #[test]
    fn test_budget_charge_rejects_overdraft() {
        let mut budget = EnergyBudget::new(20, 50);
        let used = EnergyUsed {
            rare: 25,
            limited: 0,
        };
        assert!(!budget.charge(&used));
        // untouched on rejection
        assert_eq!(budget.remaining(Rarity::Rare), 20);
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(10.456), 10.46);
        assert_eq!(round_score(10.0), 10.0);
    }
}

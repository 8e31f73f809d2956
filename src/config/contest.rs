// ==========================================
// Sorare MLB Optimizer - contest type descriptors
// ==========================================
// Each contest type carries an explicit structured descriptor (rarity
// rule, energy flag, caps, boost eligibility, slot list). Behavior is
// never derived by parsing display names at solve time.
// ==========================================

use crate::domain::types::{Rarity, Slot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Weekly contest slot template.
pub const WEEKLY_SLOTS: [Slot; 7] = [
    Slot::StartingPitcher,
    Slot::ReliefPitcher,
    Slot::CornerInfield,
    Slot::MiddleInfield,
    Slot::Outfield,
    Slot::Hitter,
    Slot::Flex,
];

/// Daily contest slot template (flex also admits starting pitchers).
pub const DAILY_SLOTS: [Slot; 7] = [
    Slot::StartingPitcher,
    Slot::ReliefPitcher,
    Slot::CornerInfield,
    Slot::MiddleInfield,
    Slot::Outfield,
    Slot::Hitter,
    Slot::FlexPlus,
];

/// Off-rarity card cap inside a mixed-rarity (All-Star) contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityCap {
    pub rarity: Rarity,
    pub max_cards: usize,
}

/// Configuration errors. Fatal to the affected contest only; the
/// allocator records an empty lineup and moves on.
#[derive(Error, Debug)]
pub enum ContestConfigError {
    #[error("unknown contest type: {0}")]
    UnknownContest(String),

    #[error("contest {0} has an empty slot list")]
    EmptySlots(String),

    #[error("contest {0} allows no rarities")]
    NoAllowedRarities(String),
}

/// One contest's full ruleset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestType {
    /// Display name, e.g. "Rare All-Star_2". Identification only.
    pub name: String,
    /// Base rarity of the contest tier.
    pub rarity: Rarity,
    /// Rarities admitted into the pool. Single-rarity contests list
    /// exactly their base rarity; All-Star contests a superset.
    pub allowed_rarities: BTreeSet<Rarity>,
    /// Caps on off-rarity cards (All-Star only).
    pub rarity_caps: Vec<RarityCap>,
    /// Whether selected non-2025 cards consume energy.
    pub uses_energy: bool,
    /// Whether 2025-year cards receive the selection boost.
    pub boost_eligible: bool,
    /// Contest-specific hitter stack cap; None uses the optimizer
    /// default. Swing contests commonly run a looser cap.
    pub team_stack_cap: Option<u32>,
    /// Required slot list, one card per slot.
    pub slots: Vec<Slot>,
}

impl ContestType {
    pub fn champion(rarity: Rarity, seq: u8) -> Self {
        Self {
            name: format!("{} Champion_{}", rarity.display_name(), seq),
            rarity,
            allowed_rarities: BTreeSet::from([rarity]),
            rarity_caps: Vec::new(),
            uses_energy: true,
            boost_eligible: true,
            team_stack_cap: None,
            slots: WEEKLY_SLOTS.to_vec(),
        }
    }

    pub fn all_star(rarity: Rarity, seq: u8) -> Self {
        // Rare All-Star admits limited cards (max 3); Limited All-Star
        // admits common cards (max 3).
        let (off_rarity, allowed) = match rarity {
            Rarity::Rare => (Rarity::Limited, BTreeSet::from([Rarity::Rare, Rarity::Limited])),
            Rarity::Limited => (
                Rarity::Common,
                BTreeSet::from([Rarity::Limited, Rarity::Common]),
            ),
            Rarity::Common => (Rarity::Common, BTreeSet::from([Rarity::Common])),
        };
        let rarity_caps = if off_rarity == rarity {
            Vec::new()
        } else {
            vec![RarityCap {
                rarity: off_rarity,
                max_cards: 3,
            }]
        };
        Self {
            name: format!("{} All-Star_{}", rarity.display_name(), seq),
            rarity,
            allowed_rarities: allowed,
            rarity_caps,
            uses_energy: true,
            boost_eligible: true,
            team_stack_cap: None,
            slots: WEEKLY_SLOTS.to_vec(),
        }
    }

    pub fn challenger(rarity: Rarity, seq: u8) -> Self {
        Self {
            name: format!("{} Challenger_{}", rarity.display_name(), seq),
            rarity,
            allowed_rarities: BTreeSet::from([rarity]),
            rarity_caps: Vec::new(),
            uses_energy: false,
            boost_eligible: false,
            team_stack_cap: None,
            slots: WEEKLY_SLOTS.to_vec(),
        }
    }

    pub fn minors() -> Self {
        Self {
            name: "Common Minors".to_string(),
            rarity: Rarity::Common,
            allowed_rarities: BTreeSet::from([Rarity::Common]),
            rarity_caps: Vec::new(),
            uses_energy: false,
            boost_eligible: false,
            team_stack_cap: None,
            slots: WEEKLY_SLOTS.to_vec(),
        }
    }

    pub fn derby(rarity: Rarity) -> Self {
        Self {
            name: format!("{} Derby", rarity.display_name()),
            rarity,
            allowed_rarities: BTreeSet::from([rarity]),
            rarity_caps: Vec::new(),
            uses_energy: true,
            boost_eligible: true,
            team_stack_cap: None,
            slots: DAILY_SLOTS.to_vec(),
        }
    }

    pub fn swing(rarity: Rarity) -> Self {
        Self {
            name: format!("{} Swing", rarity.display_name()),
            rarity,
            allowed_rarities: BTreeSet::from([rarity]),
            rarity_caps: Vec::new(),
            uses_energy: false,
            boost_eligible: true,
            team_stack_cap: None,
            slots: DAILY_SLOTS.to_vec(),
        }
    }

    /// Sanity-check the descriptor shape before it reaches the solver.
    pub fn validate(&self) -> Result<(), ContestConfigError> {
        if self.slots.is_empty() {
            return Err(ContestConfigError::EmptySlots(self.name.clone()));
        }
        if self.allowed_rarities.is_empty() {
            return Err(ContestConfigError::NoAllowedRarities(self.name.clone()));
        }
        Ok(())
    }

    /// Cap for a given rarity, if one applies in this contest.
    pub fn cap_for(&self, rarity: Rarity) -> Option<usize> {
        self.rarity_caps
            .iter()
            .find(|cap| cap.rarity == rarity)
            .map(|cap| cap.max_cards)
    }

    /// Override the hitter stack cap for this contest.
    pub fn with_team_stack_cap(mut self, cap: u32) -> Self {
        self.team_stack_cap = Some(cap);
        self
    }
}

// ==========================================
// Standard contest registries
// ==========================================

/// Weekly contests in allocation precedence order: earlier entries get
/// first access to the shared card pool and energy budget.
pub fn priority_order() -> Vec<ContestType> {
    vec![
        ContestType::champion(Rarity::Rare, 1),
        ContestType::champion(Rarity::Rare, 2),
        ContestType::champion(Rarity::Rare, 3),
        ContestType::all_star(Rarity::Rare, 1),
        ContestType::all_star(Rarity::Rare, 2),
        ContestType::all_star(Rarity::Rare, 3),
        ContestType::challenger(Rarity::Rare, 1),
        ContestType::challenger(Rarity::Rare, 2),
        ContestType::all_star(Rarity::Limited, 1),
        ContestType::all_star(Rarity::Limited, 2),
        ContestType::all_star(Rarity::Limited, 3),
        ContestType::champion(Rarity::Limited, 1),
        ContestType::champion(Rarity::Limited, 2),
        ContestType::champion(Rarity::Limited, 3),
        ContestType::challenger(Rarity::Limited, 1),
        ContestType::challenger(Rarity::Limited, 2),
        ContestType::minors(),
    ]
}

/// Daily contests in allocation precedence order.
pub fn daily_order() -> Vec<ContestType> {
    vec![
        ContestType::derby(Rarity::Rare),
        ContestType::swing(Rarity::Rare),
        ContestType::derby(Rarity::Limited),
        ContestType::swing(Rarity::Limited),
        ContestType::derby(Rarity::Common),
        ContestType::swing(Rarity::Common),
    ]
}

/// Look up a standard contest by display name.
pub fn lookup(name: &str) -> Result<ContestType, ContestConfigError> {
    priority_order()
        .into_iter()
        .chain(daily_order())
        .find(|ct| ct.name == name)
        .ok_or_else(|| ContestConfigError::UnknownContest(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_shape() {
        let order = priority_order();
        assert_eq!(order.len(), 17);
        assert_eq!(order[0].name, "Rare Champion_1");
        assert_eq!(order[16].name, "Common Minors");
        for contest in &order {
            assert!(contest.validate().is_ok());
            assert_eq!(contest.slots.len(), 7);
        }
    }

    #[test]
    fn test_all_star_caps() {
        let rare = ContestType::all_star(Rarity::Rare, 1);
        assert!(rare.allowed_rarities.contains(&Rarity::Limited));
        assert!(!rare.allowed_rarities.contains(&Rarity::Common));
        assert_eq!(rare.cap_for(Rarity::Limited), Some(3));
        assert_eq!(rare.cap_for(Rarity::Rare), None);

        let limited = ContestType::all_star(Rarity::Limited, 2);
        assert_eq!(limited.cap_for(Rarity::Common), Some(3));
        assert!(limited.allowed_rarities.contains(&Rarity::Common));
    }

    #[test]
    fn test_energy_and_boost_flags() {
        assert!(ContestType::champion(Rarity::Rare, 1).uses_energy);
        assert!(ContestType::derby(Rarity::Rare).uses_energy);
        assert!(!ContestType::swing(Rarity::Rare).uses_energy);
        assert!(!ContestType::challenger(Rarity::Rare, 1).uses_energy);
        assert!(!ContestType::minors().uses_energy);

        assert!(ContestType::swing(Rarity::Common).boost_eligible);
        assert!(!ContestType::challenger(Rarity::Limited, 1).boost_eligible);
        assert!(!ContestType::minors().boost_eligible);
    }

    #[test]
    fn test_daily_slots_use_flex_plus() {
        for contest in daily_order() {
            assert!(contest.slots.contains(&Slot::FlexPlus));
            assert!(!contest.slots.contains(&Slot::Flex));
        }
    }

    #[test]
    fn test_lookup() {
        assert!(lookup("Limited All-Star_3").is_ok());
        assert!(lookup("Rare Derby").is_ok());
        assert!(matches!(
            lookup("Epic Gauntlet_1"),
            Err(ContestConfigError::UnknownContest(_))
        ));
    }

    #[test]
    fn test_team_stack_cap_override() {
        let swing = ContestType::swing(Rarity::Rare);
        assert_eq!(swing.team_stack_cap, None);
        let loose = swing.with_team_stack_cap(9);
        assert_eq!(loose.team_stack_cap, Some(9));
    }

    #[test]
    fn test_empty_slot_list_fails_validation() {
        let mut contest = ContestType::minors();
        contest.slots.clear();
        assert!(matches!(
            contest.validate(),
            Err(ContestConfigError::EmptySlots(_))
        ));
    }
}

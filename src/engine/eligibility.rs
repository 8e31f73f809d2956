// ==========================================
// Sorare MLB Optimizer - slot eligibility model
// ==========================================
// Static mapping from contest slot to the position tags that satisfy
// it. A card fills a slot iff its position set intersects the slot's
// tag set. Pure lookups, no state.
// ==========================================

use crate::domain::types::{Position, Slot};
use std::collections::BTreeSet;

// ==========================================
// EligibilityCore - pure eligibility rules
// ==========================================
pub struct EligibilityCore;

impl EligibilityCore {
    /// Whether one position tag satisfies a slot.
    ///
    /// Group composition:
    /// - CI = {1B, 3B, DH}
    /// - MI = {SS, 2B, C}
    /// - H  = CI | MI | OF
    /// - Flx  = H | RP
    /// - Flx+ = Flx | SP
    pub fn slot_accepts(slot: Slot, position: Position) -> bool {
        match slot {
            Slot::FirstBase => position == Position::FirstBase,
            Slot::SecondBase => position == Position::SecondBase,
            Slot::ThirdBase => position == Position::ThirdBase,
            Slot::Shortstop => position == Position::Shortstop,
            Slot::Catcher => position == Position::Catcher,
            Slot::DesignatedHitter => position == Position::DesignatedHitter,
            Slot::StartingPitcher => position == Position::StartingPitcher,
            Slot::ReliefPitcher => position == Position::ReliefPitcher,
            Slot::CornerInfield => matches!(
                position,
                Position::FirstBase | Position::ThirdBase | Position::DesignatedHitter
            ),
            Slot::MiddleInfield => matches!(
                position,
                Position::Shortstop | Position::SecondBase | Position::Catcher
            ),
            Slot::Outfield => position == Position::Outfield,
            Slot::Hitter => Self::is_hitting_position(position),
            Slot::Flex => {
                Self::is_hitting_position(position) || position == Position::ReliefPitcher
            }
            Slot::FlexPlus => {
                Self::is_hitting_position(position)
                    || position == Position::ReliefPitcher
                    || position == Position::StartingPitcher
            }
        }
    }

    fn is_hitting_position(position: Position) -> bool {
        !matches!(
            position,
            Position::StartingPitcher | Position::ReliefPitcher
        )
    }

    /// A card fills a slot iff the intersection of its position set and
    /// the slot's tag set is non-empty. A card with no recognized
    /// positions is ineligible for every slot, including flex.
    pub fn can_fill(positions: &BTreeSet<Position>, slot: Slot) -> bool {
        positions.iter().any(|p| Self::slot_accepts(slot, *p))
    }

    /// A hitter is any card eligible for the H union slot.
    pub fn is_hitter(positions: &BTreeSet<Position>) -> bool {
        Self::can_fill(positions, Slot::Hitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Card;

    fn positions(raw: &str) -> BTreeSet<Position> {
        Card::parse_positions(raw)
    }

    #[test]
    fn test_catcher_dh_fills_both_infield_groups() {
        // e.g. Will Smith: catcher with DH starts
        let p = positions("baseball_designated_hitter, baseball_catcher");
        assert!(EligibilityCore::can_fill(&p, Slot::MiddleInfield));
        assert!(EligibilityCore::can_fill(&p, Slot::CornerInfield));
    }

    #[test]
    fn test_basic_single_position_slot() {
        let p = positions("baseball_first_base");
        assert!(EligibilityCore::can_fill(&p, Slot::FirstBase));
        assert!(!EligibilityCore::can_fill(&p, Slot::SecondBase));
    }

    #[test]
    fn test_multiple_positions_single_slot() {
        let p = positions("baseball_shortstop,baseball_second_base");
        assert!(EligibilityCore::can_fill(&p, Slot::MiddleInfield));
    }

    #[test]
    fn test_pitcher_not_middle_infield() {
        let p = positions("baseball_starting_pitcher");
        assert!(!EligibilityCore::can_fill(&p, Slot::MiddleInfield));
    }

    #[test]
    fn test_empty_positions_ineligible_everywhere() {
        let p = positions("");
        for slot in [
            Slot::StartingPitcher,
            Slot::ReliefPitcher,
            Slot::CornerInfield,
            Slot::MiddleInfield,
            Slot::Outfield,
            Slot::Hitter,
            Slot::Flex,
            Slot::FlexPlus,
        ] {
            assert!(!EligibilityCore::can_fill(&p, slot));
        }
        assert!(!EligibilityCore::is_hitter(&p));
    }

    #[test]
    fn test_hitter_union() {
        assert!(EligibilityCore::is_hitter(&positions("baseball_first_base")));
        assert!(EligibilityCore::is_hitter(&positions("baseball_catcher")));
        assert!(EligibilityCore::is_hitter(&positions("baseball_outfield")));
        assert!(!EligibilityCore::is_hitter(&positions(
            "baseball_relief_pitcher"
        )));
        assert!(!EligibilityCore::is_hitter(&positions(
            "baseball_starting_pitcher"
        )));
    }

    #[test]
    fn test_flex_unions() {
        let hitter = positions("baseball_third_base");
        assert!(EligibilityCore::can_fill(&hitter, Slot::Flex));
        assert!(EligibilityCore::can_fill(&hitter, Slot::FlexPlus));

        let sp = positions("baseball_starting_pitcher");
        assert!(!EligibilityCore::can_fill(&sp, Slot::Flex));
        assert!(EligibilityCore::can_fill(&sp, Slot::FlexPlus));

        let rp = positions("baseball_relief_pitcher");
        assert!(EligibilityCore::can_fill(&rp, Slot::Flex));
        assert!(EligibilityCore::can_fill(&rp, Slot::FlexPlus));
    }
}

// ==========================================
// Sorare MLB Optimizer - domain type definitions
// ==========================================
// Closed enums for rarity tiers, position tags and contest slots.
// Unknown strings degrade at the parse boundary; nothing past the
// importer carries free-form position text.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Rarity tier
// ==========================================
// Serialized lowercase, matching the card feed and the lineups table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Limited,
    Rare,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Common => write!(f, "common"),
            Rarity::Limited => write!(f, "limited"),
            Rarity::Rare => write!(f, "rare"),
        }
    }
}

impl Rarity {
    /// Parse a rarity string from the card feed. Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "limited" => Some(Rarity::Limited),
            "rare" => Some(Rarity::Rare),
            _ => None,
        }
    }

    /// Capitalized form used in contest display names ("Rare All-Star_1").
    pub fn display_name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Limited => "Limited",
            Rarity::Rare => "Rare",
        }
    }
}

// ==========================================
// Position tag
// ==========================================
// The nine tags the card feed emits as "baseball_*" strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    Catcher,
    DesignatedHitter,
    Outfield,
    StartingPitcher,
    ReliefPitcher,
}

impl Position {
    /// Parse a single feed tag. Unrecognized tags return None and are
    /// dropped by the caller (the card simply loses that eligibility).
    pub fn parse_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "baseball_first_base" => Some(Position::FirstBase),
            "baseball_second_base" => Some(Position::SecondBase),
            "baseball_third_base" => Some(Position::ThirdBase),
            "baseball_shortstop" => Some(Position::Shortstop),
            "baseball_catcher" => Some(Position::Catcher),
            "baseball_designated_hitter" => Some(Position::DesignatedHitter),
            "baseball_outfield" => Some(Position::Outfield),
            "baseball_starting_pitcher" => Some(Position::StartingPitcher),
            "baseball_relief_pitcher" => Some(Position::ReliefPitcher),
            _ => None,
        }
    }

    /// Feed tag string for this position.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Position::FirstBase => "baseball_first_base",
            Position::SecondBase => "baseball_second_base",
            Position::ThirdBase => "baseball_third_base",
            Position::Shortstop => "baseball_shortstop",
            Position::Catcher => "baseball_catcher",
            Position::DesignatedHitter => "baseball_designated_hitter",
            Position::Outfield => "baseball_outfield",
            Position::StartingPitcher => "baseball_starting_pitcher",
            Position::ReliefPitcher => "baseball_relief_pitcher",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

// ==========================================
// Contest slot
// ==========================================
// Single-position slots plus the derived groups (corner infield,
// middle infield, hitter union, flex unions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "DH")]
    DesignatedHitter,
    #[serde(rename = "SP")]
    StartingPitcher,
    #[serde(rename = "RP")]
    ReliefPitcher,
    #[serde(rename = "CI")]
    CornerInfield,
    #[serde(rename = "MI")]
    MiddleInfield,
    #[serde(rename = "OF")]
    Outfield,
    #[serde(rename = "H")]
    Hitter,
    #[serde(rename = "Flx")]
    Flex,
    #[serde(rename = "Flx+")]
    FlexPlus,
}

impl Slot {
    /// Display ordering rank: pure single-position slots come first,
    /// group slots next, then the hitter union, flex unions last.
    /// Cosmetic only; lineups are sorted by this for stable output.
    pub fn priority(&self) -> u8 {
        match self {
            Slot::FirstBase
            | Slot::SecondBase
            | Slot::ThirdBase
            | Slot::Shortstop
            | Slot::Catcher
            | Slot::DesignatedHitter => 1,
            Slot::StartingPitcher
            | Slot::ReliefPitcher
            | Slot::CornerInfield
            | Slot::MiddleInfield
            | Slot::Outfield => 2,
            Slot::Hitter => 3,
            Slot::Flex | Slot::FlexPlus => 4,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Slot::FirstBase => "1B",
            Slot::SecondBase => "2B",
            Slot::ThirdBase => "3B",
            Slot::Shortstop => "SS",
            Slot::Catcher => "C",
            Slot::DesignatedHitter => "DH",
            Slot::StartingPitcher => "SP",
            Slot::ReliefPitcher => "RP",
            Slot::CornerInfield => "CI",
            Slot::MiddleInfield => "MI",
            Slot::Outfield => "OF",
            Slot::Hitter => "H",
            Slot::Flex => "Flx",
            Slot::FlexPlus => "Flx+",
        }
    }

    /// Parse a slot code ("CI", "Flx+", ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1B" => Some(Slot::FirstBase),
            "2B" => Some(Slot::SecondBase),
            "3B" => Some(Slot::ThirdBase),
            "SS" => Some(Slot::Shortstop),
            "C" => Some(Slot::Catcher),
            "DH" => Some(Slot::DesignatedHitter),
            "SP" => Some(Slot::StartingPitcher),
            "RP" => Some(Slot::ReliefPitcher),
            "CI" => Some(Slot::CornerInfield),
            "MI" => Some(Slot::MiddleInfield),
            "OF" => Some(Slot::Outfield),
            "H" => Some(Slot::Hitter),
            "Flx" => Some(Slot::Flex),
            "Flx+" => Some(Slot::FlexPlus),
            _ => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

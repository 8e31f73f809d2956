// ==========================================
// Sorare MLB Optimizer - optimizer parameters
// ==========================================
// Immutable configuration value passed explicitly into the pool filter,
// solver and allocator. No global mutable state: contest behavior is
// table-driven through this value and the contest descriptors.
// ==========================================

use crate::domain::EnergyBudget;
use serde::{Deserialize, Serialize};

/// Tunable optimizer parameters. Loaded once (defaults, JSON file, or
/// CLI overrides) and shared immutably for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Selection-projection bonus for 2025-year cards in boost-eligible
    /// contests. Affects selection only, never the reported score.
    pub boost_2025: f64,
    /// Pairwise team-stack bonus constant: a team with k selected
    /// hitters contributes C(k,2) * stack_boost to the objective.
    pub stack_boost: f64,
    /// Energy cost of each non-2025 card in an energy-consuming
    /// contest. Weekly contests cost 25, daily contests 10.
    pub energy_per_card: i64,
    /// Hard cap on selected hitters from one team.
    pub max_team_stack: u32,
    /// Looser stack cap applied to Swing contests when set.
    pub swing_team_stack: Option<u32>,
    /// Starting energy pools for one allocation run.
    pub energy_limits: EnergyBudget,
    /// Search-node budget per solve. On exhaustion the best lineup
    /// found so far is kept; with none, the contest goes unfilled.
    pub solver_node_limit: u64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            boost_2025: 5.0,
            stack_boost: 2.0,
            energy_per_card: 25,
            max_team_stack: 6,
            swing_team_stack: None,
            energy_limits: EnergyBudget::default(),
            solver_node_limit: 20_000_000,
        }
    }
}

impl OptimizerConfig {
    /// Preset for daily contests: identical rules, cheaper energy.
    pub fn daily() -> Self {
        Self {
            energy_per_card: 10,
            ..Self::default()
        }
    }
}

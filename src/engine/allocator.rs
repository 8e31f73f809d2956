// ==========================================
// Sorare MLB Optimizer - sequential lineup allocator
// ==========================================
// Runs a list of contests against one shared card pool and energy
// budget. Each solved lineup commits its cards and energy before the
// next contest is considered, so earlier contests get first pick.
// Energy-consuming contests are processed ahead of free ones; result
// order always follows the caller's contest order.
// ==========================================

use crate::config::{ContestType, OptimizerConfig};
use crate::domain::{Card, EnergyBudget, EnergyUsed, Lineup, ProjectionTable};
use crate::engine::pool_filter::CardPoolFilter;
use crate::engine::solver::LineupSolver;
use std::collections::HashSet;
use tracing::{error, info, instrument};

/// One contest's allocation outcome. A valid contest that simply has no
/// feasible lineup carries an empty lineup and no error.
#[derive(Debug, Clone)]
pub struct ContestResult {
    pub contest: ContestType,
    pub lineup: Lineup,
    pub error: Option<String>,
}

/// Aggregate outcome of one allocation run.
#[derive(Debug, Clone)]
pub struct AllocationRun {
    /// One entry per requested contest, in the caller's order.
    pub results: Vec<ContestResult>,
    /// Total energy committed across all lineups.
    pub energy_spent: EnergyUsed,
    /// Slugs committed to some lineup in this run.
    pub used_slugs: HashSet<String>,
}

impl AllocationRun {
    pub fn filled_count(&self) -> usize {
        self.results.iter().filter(|r| !r.lineup.is_empty()).count()
    }

    pub fn total_projected_score(&self) -> f64 {
        self.results.iter().map(|r| r.lineup.projected_score).sum()
    }
}

// ==========================================
// LineupAllocator
// ==========================================
pub struct LineupAllocator {
    filter: CardPoolFilter,
}

impl LineupAllocator {
    pub fn new() -> Self {
        Self {
            filter: CardPoolFilter::new(),
        }
    }

    /// Allocate lineups for `contests` from a shared pool.
    ///
    /// Failures are isolated per contest: a misconfigured contest is
    /// recorded with an error and an empty lineup, and later contests
    /// still run with whatever pool and energy remain.
    #[instrument(skip_all, fields(contests = contests.len(), pool = pool.len()))]
    pub fn allocate(
        &self,
        pool: &[Card],
        projections: &ProjectionTable,
        contests: &[ContestType],
        ignore_players: &[String],
        config: &OptimizerConfig,
    ) -> AllocationRun {
        let pool = CardPoolFilter::apply_ignore_list(pool, ignore_players);
        let solver = LineupSolver::new(config.solver_node_limit);

        let mut used_slugs: HashSet<String> = HashSet::new();
        let mut remaining = config.energy_limits;
        let mut energy_spent = EnergyUsed::default();
        let mut results: Vec<Option<ContestResult>> = vec![None; contests.len()];

        // Energy consumers first, free contests after, stable within
        // each group.
        let mut processing: Vec<usize> = (0..contests.len())
            .filter(|&i| contests[i].uses_energy)
            .collect();
        processing.extend((0..contests.len()).filter(|&i| !contests[i].uses_energy));

        for i in processing {
            let contest = &contests[i];
            if let Err(err) = contest.validate() {
                error!(contest = %contest.name, %err, "skipping misconfigured contest");
                results[i] = Some(ContestResult {
                    contest: contest.clone(),
                    lineup: Lineup::empty(),
                    error: Some(err.to_string()),
                });
                continue;
            }

            let candidates =
                self.filter
                    .filter_and_boost(&pool, projections, contest, &used_slugs, config);
            let lineup = solver.solve(&candidates, contest, &remaining, config);

            if !lineup.is_empty() {
                if !remaining.charge(&lineup.energy_used) {
                    // Solver output exceeding the budget it was handed
                    // would be a bug; refuse the lineup rather than
                    // overdraw the shared state.
                    error!(
                        contest = %contest.name,
                        "lineup rejected: energy charge exceeds remaining budget"
                    );
                    results[i] = Some(ContestResult {
                        contest: contest.clone(),
                        lineup: Lineup::empty(),
                        error: Some("energy charge exceeds remaining budget".to_string()),
                    });
                    continue;
                }
                energy_spent.rare += lineup.energy_used.rare;
                energy_spent.limited += lineup.energy_used.limited;
                for slug in &lineup.cards {
                    used_slugs.insert(slug.clone());
                }
            }

            info!(
                contest = %contest.name,
                filled = !lineup.is_empty(),
                score = lineup.projected_score,
                energy = lineup.energy_used.total(),
                "contest allocated"
            );
            results[i] = Some(ContestResult {
                contest: contest.clone(),
                lineup,
                error: None,
            });
        }

        let results: Vec<ContestResult> = results.into_iter().flatten().collect();
        info!(
            filled = results.iter().filter(|r| !r.lineup.is_empty()).count(),
            energy_spent = energy_spent.total(),
            cards_used = used_slugs.len(),
            "allocation run complete"
        );

        AllocationRun {
            results,
            energy_spent,
            used_slugs,
        }
    }
}

impl Default for LineupAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// Sorare MLB Optimizer - lineup constraint solver
// ==========================================
// Joint slot+card assignment for one contest. Exact branch-and-bound
// over slot positions with an admissible upper bound, maximizing the
// boosted projection sum (integer cents) plus the pairwise team-stack
// bonus. Infeasibility is a first-class empty result, never an error.
// ==========================================
// Hard constraints:
// - every required slot filled exactly once, by an eligible card
// - at most one card per (player_name, team_id)
// - at most max_team_stack selected hitters per team
// - off-rarity caps for All-Star contests
// - per-rarity energy budget for energy-consuming contests
// ==========================================

use crate::config::{ContestType, OptimizerConfig};
use crate::domain::lineup::round_score;
use crate::domain::types::{Rarity, Slot};
use crate::domain::{EnergyBudget, EnergyUsed, Lineup};
use crate::engine::eligibility::EligibilityCore;
use crate::engine::pool_filter::PoolCard;
use std::collections::HashMap;
use tracing::{debug, warn};

// ==========================================
// LineupSolver
// ==========================================
pub struct LineupSolver {
    node_limit: u64,
}

/// Terminal state of one solve. Node-limit exhaustion is reported like
/// infeasibility: the caller gets no lineup either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SolveStatus {
    Optimal,
    Infeasible,
    NodeLimitReached,
}

impl LineupSolver {
    pub fn new(node_limit: u64) -> Self {
        Self { node_limit }
    }

    /// Solve one contest against a filtered candidate pool.
    ///
    /// Returns the optimal complete lineup, or the empty lineup when no
    /// feasible assignment exists (pool too small, energy exhausted,
    /// caps unsatisfiable) or the search budget runs out. Never returns
    /// a partial lineup. Deterministic for a fixed input.
    pub fn solve(
        &self,
        candidates: &[PoolCard],
        contest: &ContestType,
        remaining_energy: &EnergyBudget,
        config: &OptimizerConfig,
    ) -> Lineup {
        if contest.slots.is_empty() || candidates.len() < contest.slots.len() {
            debug!(
                contest = %contest.name,
                candidates = candidates.len(),
                slots = contest.slots.len(),
                "infeasible before search: pool smaller than slot list"
            );
            return Lineup::empty();
        }

        let model = match SearchModel::build(candidates, contest, remaining_energy, config) {
            Some(model) => model,
            None => {
                debug!(contest = %contest.name, "infeasible before search: uncoverable slot");
                return Lineup::empty();
            }
        };

        let mut search = Search::new(&model, self.node_limit);
        search.run();

        match (search.status(), search.best_assignment.as_deref()) {
            (SolveStatus::Optimal, Some(assignment)) => model.extract_lineup(assignment),
            (SolveStatus::NodeLimitReached, _) => {
                warn!(
                    contest = %contest.name,
                    node_limit = self.node_limit,
                    "solver node budget exhausted, treating as no lineup"
                );
                Lineup::empty()
            }
            _ => {
                debug!(contest = %contest.name, "no feasible assignment");
                Lineup::empty()
            }
        }
    }
}

// ==========================================
// Search model - precomputed integer formulation
// ==========================================

struct CardFacts {
    proj_cents: i64,
    base_projection: f64,
    slug: String,
    rarity: Rarity,
    energy_cost: i64,
    is_hitter: bool,
    player_id: usize,
    team_idx: Option<usize>,
}

struct SearchModel {
    cards: Vec<CardFacts>,
    /// Contest slots in display order (stable-sorted by slot priority).
    display_slots: Vec<Slot>,
    /// Eligible card indices per display slot, best projection first.
    slot_candidates: Vec<Vec<usize>>,
    /// Search visits slots most-constrained first.
    slot_order: Vec<usize>,
    /// suffix_max_cents[d] = admissible bound on projection still
    /// attainable from search depth d onward.
    suffix_max_cents: Vec<i64>,
    stack_cents: i64,
    max_team_stack: u32,
    team_count: usize,
    player_count: usize,
    /// cap per rarity (index by rarity_index), usize::MAX when uncapped
    rarity_caps: [usize; 3],
    budget_rare: i64,
    budget_limited: i64,
}

fn rarity_index(rarity: Rarity) -> usize {
    match rarity {
        Rarity::Common => 0,
        Rarity::Limited => 1,
        Rarity::Rare => 2,
    }
}

impl SearchModel {
    /// Precompute the integer model. Returns None when some slot has no
    /// eligible candidate at all (trivially infeasible).
    fn build(
        candidates: &[PoolCard],
        contest: &ContestType,
        remaining_energy: &EnergyBudget,
        config: &OptimizerConfig,
    ) -> Option<Self> {
        let mut player_ids: HashMap<crate::domain::PlayerKey, usize> = HashMap::new();
        let mut team_ids: HashMap<i32, usize> = HashMap::new();

        let cards: Vec<CardFacts> = candidates
            .iter()
            .map(|pc| {
                let player_count = player_ids.len();
                let player_id = *player_ids
                    .entry(pc.card.player_key())
                    .or_insert(player_count);
                let team_idx = pc.card.team_id.map(|t| {
                    let team_count = team_ids.len();
                    *team_ids.entry(t).or_insert(team_count)
                });
                let energy_cost = if contest.uses_energy
                    && pc.card.year != 2025
                    && matches!(pc.card.rarity, Rarity::Rare | Rarity::Limited)
                {
                    config.energy_per_card
                } else {
                    0
                };
                CardFacts {
                    proj_cents: (pc.selection_projection * 100.0).round() as i64,
                    base_projection: pc.base_projection,
                    slug: pc.card.slug.clone(),
                    rarity: pc.card.rarity,
                    energy_cost,
                    is_hitter: EligibilityCore::is_hitter(&pc.card.positions),
                    player_id,
                    team_idx,
                }
            })
            .collect();

        let mut display_slots = contest.slots.clone();
        display_slots.sort_by_key(|slot| slot.priority());

        let mut slot_candidates: Vec<Vec<usize>> = Vec::with_capacity(display_slots.len());
        for slot in &display_slots {
            let mut eligible: Vec<usize> = candidates
                .iter()
                .enumerate()
                .filter(|(_, pc)| EligibilityCore::can_fill(&pc.card.positions, *slot))
                .map(|(i, _)| i)
                .collect();
            if eligible.is_empty() {
                return None;
            }
            // Best candidates first so a strong incumbent is found
            // early; slug tie-break keeps the search deterministic.
            eligible.sort_by(|&a, &b| {
                cards[b]
                    .proj_cents
                    .cmp(&cards[a].proj_cents)
                    .then_with(|| cards[a].slug.cmp(&cards[b].slug))
            });
            slot_candidates.push(eligible);
        }

        // Most-constrained slot first; ties resolved by display index.
        let mut slot_order: Vec<usize> = (0..display_slots.len()).collect();
        slot_order.sort_by_key(|&j| (slot_candidates[j].len(), j));

        let stack_cents = (config.stack_boost * 100.0).round() as i64;
        let max_team_stack = contest.team_stack_cap.unwrap_or(config.max_team_stack);

        // Projection bound: each remaining slot contributes at most its
        // best candidate. Stack bound: each future hitter pairs with at
        // most (max_team_stack - 1) earlier hitters. Both admissible.
        let per_hitter_bonus = stack_cents * (max_team_stack.saturating_sub(1)) as i64;
        let mut suffix_max_cents = vec![0_i64; slot_order.len() + 1];
        for d in (0..slot_order.len()).rev() {
            let j = slot_order[d];
            let slot_best = cards[slot_candidates[j][0]].proj_cents;
            suffix_max_cents[d] =
                suffix_max_cents[d + 1] + slot_best.max(0) + per_hitter_bonus.max(0);
        }

        let mut rarity_caps = [usize::MAX; 3];
        for cap in &contest.rarity_caps {
            rarity_caps[rarity_index(cap.rarity)] = cap.max_cards;
        }

        Some(Self {
            player_count: player_ids.len(),
            team_count: team_ids.len(),
            cards,
            display_slots,
            slot_candidates,
            slot_order,
            suffix_max_cents,
            stack_cents,
            max_team_stack,
            rarity_caps,
            budget_rare: remaining_energy.remaining(Rarity::Rare),
            budget_limited: remaining_energy.remaining(Rarity::Limited),
        })
    }

    /// Materialize a lineup from a complete assignment (card index per
    /// display slot). Output entries follow display-slot order.
    fn extract_lineup(&self, assignment: &[usize]) -> Lineup {
        let mut cards = Vec::with_capacity(assignment.len());
        let mut slot_assignments = Vec::with_capacity(assignment.len());
        let mut projections = Vec::with_capacity(assignment.len());
        let mut energy_used = EnergyUsed::default();

        for (j, &i) in assignment.iter().enumerate() {
            let facts = &self.cards[i];
            cards.push(facts.slug.clone());
            slot_assignments.push(self.display_slots[j]);
            projections.push(facts.base_projection);
            if facts.energy_cost > 0 {
                energy_used.add(facts.rarity, facts.energy_cost);
            }
        }

        let projected_score = round_score(projections.iter().sum());
        Lineup {
            cards,
            slot_assignments,
            projections,
            projected_score,
            energy_used,
        }
    }
}

// ==========================================
// Branch-and-bound search
// ==========================================

struct Search<'a> {
    model: &'a SearchModel,
    node_budget: u64,
    aborted: bool,

    card_used: Vec<bool>,
    player_used: Vec<bool>,
    team_hitters: Vec<u32>,
    rarity_counts: [usize; 3],
    energy_rare: i64,
    energy_limited: i64,
    score_cents: i64,

    /// Card per display slot, only meaningful up to the current depth.
    assignment: Vec<usize>,
    best_cents: Option<i64>,
    best_assignment: Option<Vec<usize>>,
}

impl<'a> Search<'a> {
    fn new(model: &'a SearchModel, node_budget: u64) -> Self {
        Self {
            node_budget,
            aborted: false,
            card_used: vec![false; model.cards.len()],
            player_used: vec![false; model.player_count],
            team_hitters: vec![0; model.team_count],
            rarity_counts: [0; 3],
            energy_rare: 0,
            energy_limited: 0,
            score_cents: 0,
            assignment: vec![usize::MAX; model.display_slots.len()],
            best_cents: None,
            best_assignment: None,
            model,
        }
    }

    fn run(&mut self) {
        self.descend(0);
    }

    fn status(&self) -> SolveStatus {
        if self.best_assignment.is_some() {
            SolveStatus::Optimal
        } else if self.aborted {
            SolveStatus::NodeLimitReached
        } else {
            SolveStatus::Infeasible
        }
    }

    fn descend(&mut self, depth: usize) {
        if self.aborted {
            return;
        }
        if depth == self.model.slot_order.len() {
            if self.best_cents.map_or(true, |best| self.score_cents > best) {
                self.best_cents = Some(self.score_cents);
                self.best_assignment = Some(self.assignment.clone());
            }
            return;
        }

        // Optimistic completion bound; prune when it cannot beat the
        // incumbent.
        if let Some(best) = self.best_cents {
            if self.score_cents + self.model.suffix_max_cents[depth] <= best {
                return;
            }
        }

        let j = self.model.slot_order[depth];
        for idx in 0..self.model.slot_candidates[j].len() {
            if self.aborted {
                return;
            }
            if self.node_budget == 0 {
                self.aborted = true;
                return;
            }
            self.node_budget -= 1;

            let i = self.model.slot_candidates[j][idx];
            if !self.try_place(i) {
                continue;
            }

            self.assignment[j] = i;
            self.descend(depth + 1);
            self.assignment[j] = usize::MAX;
            self.unplace(i);
        }
    }

    /// Apply card i to the running state if every hard constraint
    /// admits it. Returns false (state untouched) otherwise.
    fn try_place(&mut self, i: usize) -> bool {
        let facts = &self.model.cards[i];
        if self.card_used[i] || self.player_used[facts.player_id] {
            return false;
        }

        let rarity_idx = rarity_index(facts.rarity);
        if self.rarity_counts[rarity_idx] >= self.model.rarity_caps[rarity_idx] {
            return false;
        }

        if facts.energy_cost > 0 {
            let (spent, budget) = match facts.rarity {
                Rarity::Rare => (self.energy_rare, self.model.budget_rare),
                Rarity::Limited => (self.energy_limited, self.model.budget_limited),
                Rarity::Common => (0, 0),
            };
            if spent + facts.energy_cost > budget {
                return false;
            }
        }

        let mut stack_gain = 0;
        if facts.is_hitter {
            if let Some(t) = facts.team_idx {
                if self.team_hitters[t] >= self.model.max_team_stack {
                    return false;
                }
                // k-th hitter of a team adds (k-1) new pairs.
                stack_gain = self.team_hitters[t] as i64 * self.model.stack_cents;
                self.team_hitters[t] += 1;
            }
        }

        self.card_used[i] = true;
        self.player_used[facts.player_id] = true;
        self.rarity_counts[rarity_idx] += 1;
        match facts.rarity {
            Rarity::Rare => self.energy_rare += facts.energy_cost,
            Rarity::Limited => self.energy_limited += facts.energy_cost,
            Rarity::Common => {}
        }
        self.score_cents += facts.proj_cents + stack_gain;
        true
    }

    fn unplace(&mut self, i: usize) {
        let facts = &self.model.cards[i];
        self.card_used[i] = false;
        self.player_used[facts.player_id] = false;
        self.rarity_counts[rarity_index(facts.rarity)] -= 1;
        match facts.rarity {
            Rarity::Rare => self.energy_rare -= facts.energy_cost,
            Rarity::Limited => self.energy_limited -= facts.energy_cost,
            Rarity::Common => {}
        }
        let mut stack_loss = 0;
        if facts.is_hitter {
            if let Some(t) = facts.team_idx {
                self.team_hitters[t] -= 1;
                stack_loss = self.team_hitters[t] as i64 * self.model.stack_cents;
            }
        }
        self.score_cents -= facts.proj_cents + stack_loss;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Card;
    use crate::domain::ProjectionTable;
    use crate::engine::pool_filter::CardPoolFilter;
    use std::collections::HashSet;

    fn card(
        slug: &str,
        name: &str,
        year: i32,
        rarity: Rarity,
        positions: &str,
        team_id: Option<i32>,
    ) -> Card {
        Card {
            slug: slug.to_string(),
            player_name: name.to_string(),
            year,
            rarity,
            positions: Card::parse_positions(positions),
            team_id,
            sealed: false,
        }
    }

    /// Seven distinct rare 2025 cards that can cover the weekly slots.
    fn base_pool() -> Vec<Card> {
        vec![
            card("sp-1", "p-sp", 2025, Rarity::Rare, "baseball_starting_pitcher", Some(1)),
            card("rp-1", "p-rp", 2025, Rarity::Rare, "baseball_relief_pitcher", Some(2)),
            card("ci-1", "p-ci", 2025, Rarity::Rare, "baseball_first_base", Some(3)),
            card("mi-1", "p-mi", 2025, Rarity::Rare, "baseball_shortstop", Some(4)),
            card("of-1", "p-of", 2025, Rarity::Rare, "baseball_outfield", Some(5)),
            card("h-1", "p-h", 2025, Rarity::Rare, "baseball_third_base", Some(6)),
            card("fx-1", "p-fx", 2025, Rarity::Rare, "baseball_catcher", Some(7)),
        ]
    }

    fn solve_pool(
        pool: &[Card],
        projections: &ProjectionTable,
        contest: &ContestType,
        energy: &EnergyBudget,
        config: &OptimizerConfig,
    ) -> Lineup {
        let filter = CardPoolFilter::new();
        let candidates =
            filter.filter_and_boost(pool, projections, contest, &HashSet::new(), config);
        LineupSolver::new(config.solver_node_limit).solve(&candidates, contest, energy, config)
    }

    fn uniform_projections(pool: &[Card], value: f64) -> ProjectionTable {
        let mut table = ProjectionTable::new();
        for c in pool {
            table.add(&c.player_name, c.team_id, value);
        }
        table
    }

    #[test]
    fn test_complete_lineup_fills_every_slot_once() {
        let pool = base_pool();
        let projections = uniform_projections(&pool, 10.0);
        let contest = ContestType::champion(Rarity::Rare, 1);
        let config = OptimizerConfig::default();

        let lineup = solve_pool(
            &pool,
            &projections,
            &contest,
            &config.energy_limits,
            &config,
        );
        assert_eq!(lineup.len(), 7);
        let mut slots = lineup.slot_assignments.clone();
        slots.sort();
        let mut expected = contest.slots.clone();
        expected.sort();
        assert_eq!(slots, expected);
        // display ordering: group slots before H before Flx
        let priorities: Vec<u8> = lineup.slot_assignments.iter().map(|s| s.priority()).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);
    }

    #[test]
    fn test_insufficient_pool_returns_empty_not_partial() {
        let mut pool = base_pool();
        pool.pop();
        let projections = uniform_projections(&pool, 10.0);
        let contest = ContestType::champion(Rarity::Rare, 1);
        let config = OptimizerConfig::default();

        let lineup = solve_pool(
            &pool,
            &projections,
            &contest,
            &config.energy_limits,
            &config,
        );
        assert!(lineup.is_empty());
    }

    #[test]
    fn test_duplicate_player_across_printings_excluded() {
        let mut pool = base_pool();
        // second printing of the OF player, better projection
        pool.push(card(
            "of-1b",
            "p-of",
            2024,
            Rarity::Rare,
            "baseball_outfield",
            Some(5),
        ));
        let mut projections = uniform_projections(&pool, 10.0);
        projections.add("p-of", Some(5), 90.0);

        let contest = ContestType::champion(Rarity::Rare, 1);
        let config = OptimizerConfig::default();
        let lineup = solve_pool(
            &pool,
            &projections,
            &contest,
            &config.energy_limits,
            &config,
        );

        assert_eq!(lineup.len(), 7);
        let of_cards: Vec<&String> = lineup
            .cards
            .iter()
            .filter(|slug| slug.starts_with("of-1"))
            .collect();
        assert_eq!(of_cards.len(), 1, "only one printing of the player may play");
    }

    #[test]
    fn test_exact_energy_budget_boundary() {
        // One non-2025 rare card costing exactly the remaining budget is
        // selectable; two are not.
        let mut pool = base_pool();
        pool[0].year = 2024; // sp-1 now costs energy
        let projections = uniform_projections(&pool, 10.0);
        let contest = ContestType::champion(Rarity::Rare, 1);
        let config = OptimizerConfig::default();

        let lineup = solve_pool(
            &pool,
            &projections,
            &contest,
            &EnergyBudget::new(25, 0),
            &config,
        );
        assert_eq!(lineup.len(), 7);
        assert_eq!(lineup.energy_used.rare, 25);

        // Second energy card exceeds the budget; no SP replacement
        // exists, so the contest becomes infeasible.
        pool[1].year = 2024; // rp-1 also costs energy now
        let lineup = solve_pool(
            &pool,
            &projections,
            &contest,
            &EnergyBudget::new(25, 0),
            &config,
        );
        assert!(lineup.is_empty());
    }

    #[test]
    fn test_stack_bonus_beats_slightly_better_projection() {
        // Two OF-eligible fillers; the one sharing a team with existing
        // hitters wins despite a marginally lower projection, and the
        // off-team filler is strictly dominated by the rest of the pool.
        let mut pool = base_pool();
        // put three hitters on team 9
        pool[2].team_id = Some(9);
        pool[3].team_id = Some(9);
        pool.push(card(
            "stack-1",
            "p-stack",
            2025,
            Rarity::Rare,
            "baseball_outfield",
            Some(9),
        ));
        pool.push(card(
            "spread-1",
            "p-spread",
            2025,
            Rarity::Rare,
            "baseball_outfield",
            Some(30),
        ));
        let mut projections = uniform_projections(&pool, 10.0);
        projections.add("p-stack", Some(9), -0.5); // 9.5, 3 new pairs worth 6.0
        projections.add("p-spread", Some(30), -0.1); // 9.9, no stack

        let contest = ContestType::champion(Rarity::Rare, 1);
        let config = OptimizerConfig::default();
        let lineup = solve_pool(
            &pool,
            &projections,
            &contest,
            &config.energy_limits,
            &config,
        );

        assert_eq!(lineup.len(), 7);
        assert!(lineup.cards.contains(&"stack-1".to_string()));
        assert!(!lineup.cards.contains(&"spread-1".to_string()));
    }

    #[test]
    fn test_team_stack_cap_enforced() {
        // Nine hitters on one team, cap of 6: a full lineup exists only
        // if the solver respects the cap using the off-team cards.
        let mut pool = vec![
            card("sp-1", "p-sp", 2025, Rarity::Rare, "baseball_starting_pitcher", Some(1)),
        ];
        for i in 0..8 {
            pool.push(card(
                &format!("h-{i}"),
                &format!("p-h{i}"),
                2025,
                Rarity::Rare,
                "baseball_outfield",
                Some(9),
            ));
        }
        pool.push(card("alt-1", "p-alt1", 2025, Rarity::Rare, "baseball_relief_pitcher", Some(2)));
        pool.push(card("alt-2", "p-alt2", 2025, Rarity::Rare, "baseball_catcher", Some(3)));
        pool.push(card("alt-3", "p-alt3", 2025, Rarity::Rare, "baseball_first_base", Some(4)));

        let projections = uniform_projections(&pool, 10.0);
        let contest = ContestType::champion(Rarity::Rare, 1);
        let mut config = OptimizerConfig::default();
        config.max_team_stack = 3;

        let lineup = solve_pool(
            &pool,
            &projections,
            &contest,
            &config.energy_limits,
            &config,
        );
        assert_eq!(lineup.len(), 7);
        let team9_count = lineup
            .cards
            .iter()
            .filter(|slug| slug.starts_with("h-"))
            .count();
        assert!(team9_count <= 3, "team stack cap violated: {team9_count}");
    }

    #[test]
    fn test_all_star_off_rarity_cap() {
        // Rare All-Star: limited cards capped at 3 even when they have
        // the best projections.
        let mut pool = base_pool();
        for c in pool.iter_mut() {
            c.rarity = Rarity::Rare;
        }
        let mut limited = Vec::new();
        for i in 0..5 {
            limited.push(card(
                &format!("ltd-{i}"),
                &format!("p-ltd{i}"),
                2025,
                Rarity::Limited,
                "baseball_outfield",
                Some(20 + i),
            ));
        }
        pool.extend(limited);
        let mut projections = uniform_projections(&pool, 5.0);
        for i in 0..5 {
            projections.add(&format!("p-ltd{i}"), Some(20 + i as i32), 50.0);
        }

        let contest = ContestType::all_star(Rarity::Rare, 1);
        let config = OptimizerConfig::default();
        let lineup = solve_pool(
            &pool,
            &projections,
            &contest,
            &config.energy_limits,
            &config,
        );

        assert_eq!(lineup.len(), 7);
        let limited_count = lineup
            .cards
            .iter()
            .filter(|slug| slug.starts_with("ltd-"))
            .count();
        assert_eq!(limited_count, 3);
    }

    #[test]
    fn test_boost_reported_score_is_unboosted() {
        let pool = base_pool();
        let projections = uniform_projections(&pool, 10.0);
        let contest = ContestType::champion(Rarity::Rare, 1);
        let config = OptimizerConfig::default();

        let lineup = solve_pool(
            &pool,
            &projections,
            &contest,
            &config.energy_limits,
            &config,
        );
        // all 2025 cards: selection sees 15.0 each, report stays 10.0
        assert_eq!(lineup.projected_score, 70.0);
        assert!(lineup.projections.iter().all(|&p| p == 10.0));
    }

    #[test]
    fn test_zero_projection_cards_are_selectable() {
        let pool = base_pool();
        let projections = ProjectionTable::new();
        let contest = ContestType::challenger(Rarity::Rare, 1);
        let config = OptimizerConfig::default();

        let lineup = solve_pool(
            &pool,
            &projections,
            &contest,
            &config.energy_limits,
            &config,
        );
        assert_eq!(lineup.len(), 7);
        assert_eq!(lineup.projected_score, 0.0);
    }

    #[test]
    fn test_determinism_across_runs() {
        let mut pool = base_pool();
        for i in 0..6 {
            pool.push(card(
                &format!("x-{i}"),
                &format!("p-x{i}"),
                2024,
                Rarity::Rare,
                "baseball_outfield,baseball_catcher",
                Some(i),
            ));
        }
        let mut projections = uniform_projections(&pool, 10.0);
        for i in 0..6 {
            projections.add(&format!("p-x{i}"), Some(i as i32), 7.5 + i as f64);
        }
        let contest = ContestType::champion(Rarity::Rare, 1);
        let config = OptimizerConfig::default();

        let first = solve_pool(
            &pool,
            &projections,
            &contest,
            &config.energy_limits,
            &config,
        );
        for _ in 0..3 {
            let again = solve_pool(
                &pool,
                &projections,
                &contest,
                &config.energy_limits,
                &config,
            );
            assert_eq!(again.projected_score, first.projected_score);
            assert_eq!(again.cards, first.cards);
        }
    }

    #[test]
    fn test_node_limit_exhaustion_yields_empty() {
        let pool = base_pool();
        let projections = uniform_projections(&pool, 10.0);
        let contest = ContestType::champion(Rarity::Rare, 1);
        let config = OptimizerConfig::default();
        let filter = CardPoolFilter::new();
        let candidates =
            filter.filter_and_boost(&pool, &projections, &contest, &HashSet::new(), &config);

        let lineup =
            LineupSolver::new(2).solve(&candidates, &contest, &config.energy_limits, &config);
        assert!(lineup.is_empty());
    }
}

// ==========================================
// Sorare MLB Optimizer - text report rendering
// ==========================================
// Human-readable run summary: per-contest lineups in contest order, an
// energy summary, and the list of owned cards with zero or missing
// projections.
// ==========================================

use crate::config::OptimizerConfig;
use crate::domain::{Card, ProjectionTable};
use crate::engine::AllocationRun;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

/// Render the full run report to a string.
pub fn render_report(
    username: &str,
    game_week: &str,
    run: &AllocationRun,
    config: &OptimizerConfig,
    pool: &[Card],
    projections: &ProjectionTable,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Lineups for {username} - Game Week {game_week}");
    let _ = writeln!(
        out,
        "2025 Card Boost: {}, Stack Boost: {}, Energy Per Card: {}\n",
        config.boost_2025, config.stack_boost, config.energy_per_card
    );

    for result in &run.results {
        if result.lineup.is_empty() {
            continue;
        }
        let lineup = &result.lineup;
        let _ = writeln!(out, "--- {} ---", result.contest.name);
        let _ = writeln!(out, "Projected Score: {:.2}", lineup.projected_score);
        let _ = writeln!(
            out,
            "Energy Used: Rare={}, Limited={}",
            lineup.energy_used.rare, lineup.energy_used.limited
        );
        let _ = writeln!(out, "Cards:");
        for ((slug, slot), proj) in lineup
            .cards
            .iter()
            .zip(&lineup.slot_assignments)
            .zip(&lineup.projections)
        {
            let _ = writeln!(out, "  {:<4} : {:<30} - {:.2}", slot.code(), slug, proj);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "--- ENERGY SUMMARY ---");
    let limits = &config.energy_limits;
    let _ = writeln!(
        out,
        "Total Rare Energy Used: {}/{} (Remaining: {})",
        run.energy_spent.rare,
        limits.rare,
        limits.rare - run.energy_spent.rare
    );
    let _ = writeln!(
        out,
        "Total Limited Energy Used: {}/{} (Remaining: {})\n",
        run.energy_spent.limited,
        limits.limited,
        limits.limited - run.energy_spent.limited
    );

    let _ = writeln!(out, "--- MISSING PROJECTIONS ---");
    let missing: Vec<&Card> = pool
        .iter()
        .filter(|card| !card.sealed)
        .filter(|card| projections.get(&card.player_name, card.team_id) == 0.0)
        .collect();
    if missing.is_empty() {
        let _ = writeln!(out, "All cards have projections.");
    } else {
        let _ = writeln!(
            out,
            "The following owned cards have zero or missing projections:"
        );
        for card in missing {
            let _ = writeln!(out, "- {} (slug: {})", card.player_name, card.slug);
        }
    }

    out
}

/// Render and write the report, creating parent directories as needed.
pub fn write_report<P: AsRef<Path>>(
    path: P,
    username: &str,
    game_week: &str,
    run: &AllocationRun,
    config: &OptimizerConfig,
    pool: &[Card],
    projections: &ProjectionTable,
) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let report = render_report(username, game_week, run, config, pool, projections);
    fs::write(path, report)?;
    info!(path = %path.display(), "report written");
    Ok(())
}

// ==========================================
// Sorare MLB Optimizer - lineup generation service
// ==========================================
// Orchestrates one full run: import feeds, allocate lineups across the
// contest order, persist the results, and render the text report. The
// engines below this layer stay pure; all I/O lives here.
// ==========================================

use crate::config::{contest, ContestType, OptimizerConfig};
use crate::domain::Card;
use crate::engine::{AllocationRun, LineupAllocator};
use crate::gameweek;
use crate::importer::{CardImporter, ImportError, ProjectionImporter, SkippedRow};
use crate::report;
use crate::repository::{LineupRepository, RepositoryError};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, instrument};

/// Service-layer errors. Contest-level failures never surface here;
/// only run-level problems (unreadable feeds, broken database) do.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("import failed: {0}")]
    Import(#[from] ImportError),

    #[error("repository failed: {0}")]
    Repository(#[from] RepositoryError),

    #[error("report write failed: {0}")]
    Report(#[from] std::io::Error),

    #[error("no usable cards after import")]
    EmptyCardPool,
}

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub username: String,
    pub cards_csv: PathBuf,
    pub projections_csv: PathBuf,
    pub ignore_players: Vec<String>,
    /// Override the derived game week label (mainly for tests).
    pub game_week: Option<String>,
    /// Where to write the text report; None skips it.
    pub output_path: Option<PathBuf>,
    pub config: OptimizerConfig,
}

/// Outcome of one generation run.
#[derive(Debug)]
pub struct RunSummary {
    pub game_week: String,
    pub run: AllocationRun,
    pub skipped_rows: Vec<SkippedRow>,
    pub lineups_saved: usize,
}

// ==========================================
// LineupService
// ==========================================
pub struct LineupService {
    repo: LineupRepository,
    allocator: LineupAllocator,
    card_importer: CardImporter,
    projection_importer: ProjectionImporter,
}

impl LineupService {
    pub fn new(repo: LineupRepository) -> Self {
        Self {
            repo,
            allocator: LineupAllocator::new(),
            card_importer: CardImporter::new(),
            projection_importer: ProjectionImporter::new(),
        }
    }

    /// Generate, persist and report the weekly contest lineups.
    #[instrument(skip_all, fields(username = %request.username))]
    pub fn generate_weekly(&self, request: &RunRequest) -> Result<RunSummary, ServiceError> {
        let game_week = request
            .game_week
            .clone()
            .unwrap_or_else(gameweek::current_game_week);
        info!(%game_week, "starting weekly lineup generation");
        self.generate(request, &game_week, contest::priority_order(), false)
    }

    /// Generate and persist daily contest lineups. Cards already
    /// committed to this game week's weekly lineups are excluded.
    #[instrument(skip_all, fields(username = %request.username))]
    pub fn generate_daily(&self, request: &RunRequest) -> Result<RunSummary, ServiceError> {
        let game_week = request
            .game_week
            .clone()
            .unwrap_or_else(gameweek::current_daily_game_week);
        info!(%game_week, "starting daily lineup generation");

        // Swing contests are the free (non-energy) daily entries; they
        // take the looser stack cap when one is configured.
        let mut contests = contest::daily_order();
        if let Some(cap) = request.config.swing_team_stack {
            contests = contests
                .into_iter()
                .map(|ct| {
                    if !ct.uses_energy {
                        ct.with_team_stack_cap(cap)
                    } else {
                        ct
                    }
                })
                .collect();
        }
        self.generate(request, &game_week, contests, true)
    }

    fn generate(
        &self,
        request: &RunRequest,
        game_week: &str,
        contests: Vec<ContestType>,
        exclude_weekly_cards: bool,
    ) -> Result<RunSummary, ServiceError> {
        let import = self.card_importer.import(&request.cards_csv)?;
        let projections = self.projection_importer.import(&request.projections_csv)?;

        let mut pool: Vec<Card> = import.cards;
        if exclude_weekly_cards {
            // Weekly lineups for the containing game week lock their
            // cards out of daily play.
            let weekly_week = gameweek::current_game_week();
            let committed = self.repo.used_card_slugs(&request.username, &weekly_week)?;
            if !committed.is_empty() {
                info!(
                    committed = committed.len(),
                    "excluding cards already in weekly lineups"
                );
                pool.retain(|card| !committed.contains(&card.slug));
            }
        }
        if pool.is_empty() {
            return Err(ServiceError::EmptyCardPool);
        }

        let run = self.allocator.allocate(
            &pool,
            &projections,
            &contests,
            &request.ignore_players,
            &request.config,
        );

        let lineups_saved = self
            .repo
            .save_run(&request.username, game_week, &run, &request.config)?;

        if let Some(output_path) = &request.output_path {
            report::write_report(
                output_path,
                &request.username,
                game_week,
                &run,
                &request.config,
                &pool,
                &projections,
            )?;
        }

        info!(
            filled = run.filled_count(),
            saved = lineups_saved,
            total_score = run.total_projected_score(),
            "generation run complete"
        );
        Ok(RunSummary {
            game_week: game_week.to_string(),
            run,
            skipped_rows: import.skipped,
            lineups_saved,
        })
    }
}

// ==========================================
// End-to-end lineup generation tests
// ==========================================
// Full flow through the service layer: CSV feeds -> allocation ->
// SQLite persistence -> text report. Exercises the weekly/daily
// interplay (weekly lineups lock cards out of daily play).
// ==========================================

use sorare_mlb_optimizer::config::OptimizerConfig;
use sorare_mlb_optimizer::logging;
use sorare_mlb_optimizer::repository::LineupRepository;
use sorare_mlb_optimizer::service::{LineupService, RunRequest, ServiceError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

// ==========================================
// Fixture
// ==========================================

struct Fixture {
    _dir: TempDir,
    cards_csv: PathBuf,
    projections_csv: PathBuf,
    db_path: PathBuf,
    report_path: PathBuf,
}

const POSITIONS: [&str; 7] = [
    "baseball_starting_pitcher",
    "baseball_relief_pitcher",
    "baseball_first_base",
    "baseball_shortstop",
    "baseball_outfield",
    "baseball_third_base",
    "baseball_catcher",
];

/// Two full sets of rare 2025 cards plus one common set, with one bad
/// feed row and one card lacking projections.
fn fixture() -> Fixture {
    logging::init_test();
    let dir = tempfile::tempdir().unwrap();
    let cards_csv = dir.path().join("cards.csv");
    let projections_csv = dir.path().join("projections.csv");
    let db_path = dir.path().join("lineups.db");
    let report_path = dir.path().join("out/report.txt");

    let mut cards = std::fs::File::create(&cards_csv).unwrap();
    writeln!(cards, "slug,name,year,rarity,positions,team_id,sealed").unwrap();
    for set in 0..2 {
        for (i, pos) in POSITIONS.iter().enumerate() {
            writeln!(
                cards,
                "rare{set}-{i},rare-player{set}-{i},2025,rare,{pos},{},false",
                set * 10 + i
            )
            .unwrap();
        }
    }
    for (i, pos) in POSITIONS.iter().enumerate() {
        writeln!(
            cards,
            "common0-{i},common-player-{i},2025,common,{pos},{},false",
            20 + i
        )
        .unwrap();
    }
    // bad row (unparseable year) and a card with no projection row
    writeln!(cards, "bad-1,bad-player,????,rare,baseball_outfield,1,false").unwrap();
    writeln!(cards, "noproj-1,no-proj,2025,rare,baseball_outfield,40,false").unwrap();

    let mut projections = std::fs::File::create(&projections_csv).unwrap();
    writeln!(projections, "player_name,team_id,sorare_score").unwrap();
    for set in 0..2 {
        for i in 0..POSITIONS.len() {
            // split across two game rows to exercise accumulation
            writeln!(projections, "rare-player{set}-{i},{},6.0", set * 10 + i).unwrap();
            writeln!(projections, "rare-player{set}-{i},{},4.0", set * 10 + i).unwrap();
        }
    }
    for i in 0..POSITIONS.len() {
        writeln!(projections, "common-player-{i},{},5.0", 20 + i).unwrap();
    }

    Fixture {
        _dir: dir,
        cards_csv,
        projections_csv,
        db_path,
        report_path,
    }
}

fn request(fixture: &Fixture, game_week: &str) -> RunRequest {
    RunRequest {
        username: "alice".to_string(),
        cards_csv: fixture.cards_csv.clone(),
        projections_csv: fixture.projections_csv.clone(),
        ignore_players: Vec::new(),
        game_week: Some(game_week.to_string()),
        output_path: Some(fixture.report_path.clone()),
        config: OptimizerConfig::default(),
    }
}

fn service(fixture: &Fixture) -> LineupService {
    let repo = LineupRepository::new(fixture.db_path.to_str().unwrap()).unwrap();
    LineupService::new(repo)
}

// ==========================================
// Weekly flow
// ==========================================

#[test]
fn test_weekly_flow_persists_and_reports() {
    let fixture = fixture();
    let week = "2025-08-22_to_2025-08-28";

    let summary = service(&fixture).generate_weekly(&request(&fixture, week)).unwrap();

    // 15 usable rares (two full sets + noproj) and 7 commons:
    // Rare Champion_1, Rare Champion_2 and Common Minors fill.
    assert_eq!(summary.run.results.len(), 17);
    assert_eq!(summary.run.filled_count(), 3);
    assert_eq!(summary.lineups_saved, 3);
    assert_eq!(summary.skipped_rows.len(), 1);
    assert_eq!(summary.skipped_rows[0].reason, "invalid year: \"????\"");

    // persisted rows match the run
    let repo = LineupRepository::new(fixture.db_path.to_str().unwrap()).unwrap();
    let stored = repo.list("alice", week).unwrap();
    assert_eq!(stored.len(), 3);
    let types: Vec<&str> = stored.iter().map(|s| s.lineup_type.as_str()).collect();
    assert!(types.contains(&"Rare Champion_1"));
    assert!(types.contains(&"Rare Champion_2"));
    assert!(types.contains(&"Common Minors"));
    for lineup in &stored {
        assert_eq!(lineup.cards.len(), 7);
        assert_eq!(lineup.slot_assignments.len(), 7);
        assert_eq!(lineup.projections.len(), 7);
    }

    // all cards 2025: no energy spent anywhere
    assert_eq!(summary.run.energy_spent.total(), 0);

    // report on disk
    let report = std::fs::read_to_string(&fixture.report_path).unwrap();
    assert!(report.contains("Lineups for alice - Game Week 2025-08-22_to_2025-08-28"));
    assert!(report.contains("--- Rare Champion_1 ---"));
    assert!(report.contains("--- ENERGY SUMMARY ---"));
    assert!(report.contains("- no-proj (slug: noproj-1)"));
}

#[test]
fn test_weekly_rerun_replaces_rows() {
    let fixture = fixture();
    let week = "2025-08-22_to_2025-08-28";
    let service = service(&fixture);

    service.generate_weekly(&request(&fixture, week)).unwrap();
    let summary = service.generate_weekly(&request(&fixture, week)).unwrap();
    assert_eq!(summary.lineups_saved, 3);

    let repo = LineupRepository::new(fixture.db_path.to_str().unwrap()).unwrap();
    assert_eq!(repo.list("alice", week).unwrap().len(), 3);
}

#[test]
fn test_ignore_list_removes_player_everywhere() {
    let fixture = fixture();
    let week = "2025-08-22_to_2025-08-28";

    let mut req = request(&fixture, week);
    req.ignore_players = vec!["RARE-PLAYER0-4".to_string()]; // OF of the first set
    let summary = service(&fixture).generate_weekly(&req).unwrap();

    for result in &summary.run.results {
        assert!(!result.lineup.cards.contains(&"rare0-4".to_string()));
    }
    // the second set's OF (and noproj-1) still cover the OF slots
    assert_eq!(summary.run.filled_count(), 3);
}

// ==========================================
// Weekly -> daily interplay
// ==========================================

#[test]
fn test_daily_excludes_cards_committed_weekly() {
    let fixture = fixture();
    let service = service(&fixture);

    // weekly run under the real current game week, so the daily run's
    // lockout lookup finds it
    let weekly_req = RunRequest {
        game_week: None,
        output_path: None,
        ..request(&fixture, "unused")
    };
    let weekly = service.generate_weekly(&weekly_req).unwrap();
    assert_eq!(weekly.run.filled_count(), 3);
    let weekly_rare_cards: Vec<String> = weekly
        .run
        .results
        .iter()
        .filter(|r| r.contest.name.starts_with("Rare"))
        .flat_map(|r| r.lineup.cards.clone())
        .collect();
    assert_eq!(weekly_rare_cards.len(), 14);

    let mut daily_req = request(&fixture, "2025-08-25");
    daily_req.output_path = None;
    daily_req.config = OptimizerConfig::daily();
    let daily = service.generate_daily(&daily_req).unwrap();

    // 15 rares minus 14 locked leaves one rare: no rare daily lineup.
    // Commons were locked by Minors, so no common lineup either.
    for result in &daily.run.results {
        for slug in &result.lineup.cards {
            assert!(
                !weekly_rare_cards.contains(slug),
                "card {slug} reused from a weekly lineup"
            );
        }
    }
    assert_eq!(daily.run.filled_count(), 0);
}

// ==========================================
// Failure modes
// ==========================================

#[test]
fn test_unreadable_feeds_are_run_level_errors() {
    let fixture = fixture();
    let service = service(&fixture);

    let mut req = request(&fixture, "2025-08-22_to_2025-08-28");
    req.projections_csv = PathBuf::from("missing_projections.csv");
    assert!(matches!(
        service.generate_weekly(&req).unwrap_err(),
        ServiceError::Import(_)
    ));
}

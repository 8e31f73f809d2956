// ==========================================
// Sorare MLB Optimizer - CLI entry point
// ==========================================

use sorare_mlb_optimizer::config::OptimizerConfig;
use sorare_mlb_optimizer::domain::EnergyBudget;
use sorare_mlb_optimizer::repository::LineupRepository;
use sorare_mlb_optimizer::service::{LineupService, RunRequest};
use sorare_mlb_optimizer::{logging, APP_NAME, VERSION};
use std::path::PathBuf;
use std::process;

const USAGE: &str = "\
Usage: sorare-mlb-optimizer [OPTIONS] <username>

Options:
  --daily                   build daily contests instead of weekly
  --cards <path>            card feed CSV (default: cards.csv)
  --projections <path>      projection feed CSV (default: projections.csv)
  --db <path>               lineups database (default: user data dir)
  --output <path>           write the text report here
  --ignore <names>          comma-separated player names to exclude
  --game-week <label>       override the derived game week label
  --rare-energy <n>         rare energy budget (default: 50)
  --limited-energy <n>      limited energy budget (default: 50)
  --boost-2025 <x>          2025 card selection boost (default: 5.0)
  --stack-boost <x>         team stack bonus (default: 2.0)
  --energy-per-card <n>     energy cost per non-2025 card
  --swing-stack <n>         team stack cap for Swing contests (daily)
  -h, --help                print this help
";

struct CliArgs {
    username: String,
    daily: bool,
    cards_csv: PathBuf,
    projections_csv: PathBuf,
    db_path: Option<String>,
    output_path: Option<PathBuf>,
    ignore_players: Vec<String>,
    game_week: Option<String>,
    config: OptimizerConfig,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut username: Option<String> = None;
    let mut daily = false;
    let mut cards_csv = PathBuf::from("cards.csv");
    let mut projections_csv = PathBuf::from("projections.csv");
    let mut db_path = None;
    let mut output_path = None;
    let mut ignore_players = Vec::new();
    let mut game_week = None;

    let mut rare_energy: Option<i64> = None;
    let mut limited_energy: Option<i64> = None;
    let mut boost_2025: Option<f64> = None;
    let mut stack_boost: Option<f64> = None;
    let mut energy_per_card: Option<i64> = None;
    let mut swing_stack: Option<u32> = None;

    fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
        args.next().ok_or_else(|| format!("{flag} needs a value"))
    }

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--daily" => daily = true,
            "--cards" => cards_csv = PathBuf::from(value(&mut args, "--cards")?),
            "--projections" => {
                projections_csv = PathBuf::from(value(&mut args, "--projections")?)
            }
            "--db" => db_path = Some(value(&mut args, "--db")?),
            "--output" => output_path = Some(PathBuf::from(value(&mut args, "--output")?)),
            "--ignore" => {
                ignore_players = value(&mut args, "--ignore")?
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect();
            }
            "--game-week" => game_week = Some(value(&mut args, "--game-week")?),
            "--rare-energy" => {
                rare_energy = Some(parse_number(&value(&mut args, "--rare-energy")?)?)
            }
            "--limited-energy" => {
                limited_energy = Some(parse_number(&value(&mut args, "--limited-energy")?)?)
            }
            "--boost-2025" => boost_2025 = Some(parse_number(&value(&mut args, "--boost-2025")?)?),
            "--stack-boost" => {
                stack_boost = Some(parse_number(&value(&mut args, "--stack-boost")?)?)
            }
            "--energy-per-card" => {
                energy_per_card = Some(parse_number(&value(&mut args, "--energy-per-card")?)?)
            }
            "--swing-stack" => {
                swing_stack = Some(parse_number(&value(&mut args, "--swing-stack")?)?)
            }
            "-h" | "--help" => {
                print!("{USAGE}");
                process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}"));
            }
            other => {
                if username.is_some() {
                    return Err(format!("unexpected argument: {other}"));
                }
                username = Some(other.to_string());
            }
        }
    }

    let username = username.ok_or_else(|| "missing <username>".to_string())?;

    let mut config = if daily {
        OptimizerConfig::daily()
    } else {
        OptimizerConfig::default()
    };
    config.energy_limits = EnergyBudget::new(
        rare_energy.unwrap_or(config.energy_limits.rare),
        limited_energy.unwrap_or(config.energy_limits.limited),
    );
    if let Some(boost) = boost_2025 {
        config.boost_2025 = boost;
    }
    if let Some(stack) = stack_boost {
        config.stack_boost = stack;
    }
    if let Some(cost) = energy_per_card {
        config.energy_per_card = cost;
    }
    config.swing_team_stack = swing_stack;

    Ok(CliArgs {
        username,
        daily,
        cards_csv,
        projections_csv,
        db_path,
        output_path,
        ignore_players,
        game_week,
        config,
    })
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid numeric value: {raw}"))
}

/// Database location: explicit flag, then environment variable, then
/// the user data directory, then the working directory.
fn default_db_path() -> String {
    if let Ok(path) = std::env::var("SORARE_MLB_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("sorare-mlb-optimizer");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir.join("lineups.db").display().to_string();
        }
    }
    "./lineups.db".to_string()
}

fn main() {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            process::exit(2);
        }
    };

    tracing::info!("{} v{}", APP_NAME, VERSION);

    let db_path = args.db_path.clone().unwrap_or_else(default_db_path);
    tracing::info!(%db_path, "using lineups database");

    let repo = match LineupRepository::new(&db_path) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("error: cannot open database {db_path}: {err}");
            process::exit(1);
        }
    };
    let service = LineupService::new(repo);

    let request = RunRequest {
        username: args.username.clone(),
        cards_csv: args.cards_csv,
        projections_csv: args.projections_csv,
        ignore_players: args.ignore_players,
        game_week: args.game_week,
        output_path: args.output_path,
        config: args.config,
    };

    let result = if args.daily {
        service.generate_daily(&request)
    } else {
        service.generate_weekly(&request)
    };

    match result {
        Ok(summary) => {
            println!(
                "Game week {}: {} of {} contests filled, total projected score {:.2}",
                summary.game_week,
                summary.run.filled_count(),
                summary.run.results.len(),
                summary.run.total_projected_score()
            );
            if !summary.skipped_rows.is_empty() {
                println!("{} card feed rows skipped:", summary.skipped_rows.len());
                for skipped in &summary.skipped_rows {
                    println!("  row {}: {}", skipped.row, skipped.reason);
                }
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

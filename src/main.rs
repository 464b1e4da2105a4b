use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cricket_league::api::{build_router, state::AppState};
use cricket_league::calculate::{find_issues, stat_leaders, MatchScoreboard, Stat};
use cricket_league::config::AppConfig;
use cricket_league::models::LeagueSnapshot;
use cricket_league::storage::{jsonl, seed, LeagueStore, StorageConfig};

#[derive(Parser)]
#[command(name = "cricket-league")]
#[command(about = "T20 league standings, scoreboards and leaderboards")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the JSON API
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,

        /// Ignore any exported snapshot and serve the built-in data
        #[arg(long)]
        seed_only: bool,
    },

    /// Print the ranked points table
    Standings,

    /// Print a player leaderboard
    Leaders {
        /// runs, wickets, matches, highest_score, average, strike_rate, fifties, hundreds
        #[arg(long, default_value = "runs")]
        stat: String,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print a match scoreboard
    Scorecard {
        match_id: String,
    },

    /// Write the built-in league as a JSONL snapshot
    Export,

    /// Report data-quality problems
    Check,
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn print_standings(snapshot: &LeagueSnapshot, config: &AppConfig) {
    let table = cricket_league::calculate::rank_standings_with(
        &snapshot.points_table,
        config.league.qualifying_spots,
    );
    println!("{} points table", config.league.name);
    println!(
        "{:>3}  {:<30} {:>3} {:>3} {:>3} {:>3} {:>3} {:>4} {:>7}",
        "Pos", "Team", "P", "W", "L", "T", "NR", "Pts", "NRR"
    );
    for row in table {
        let entry = row.entry;
        println!(
            "{:>3}{} {:<30} {:>3} {:>3} {:>3} {:>3} {:>3} {:>4} {:>+7.3}",
            row.position,
            if row.qualifying { "*" } else { " " },
            snapshot.team_name(&entry.team_id),
            entry.played,
            entry.won,
            entry.lost,
            entry.tied,
            entry.no_result,
            entry.points,
            entry.net_run_rate,
        );
    }
    println!("* qualifies for the playoffs");
}

fn print_leaders(snapshot: &LeagueSnapshot, stat: Stat, limit: usize) {
    println!("Top {} by {}", limit, stat);
    for row in stat_leaders(&snapshot.players, stat, limit) {
        println!(
            "{:>3}. {:<25} {:<6} {}",
            row.rank,
            row.player.name,
            snapshot
                .team(&row.player.team_id)
                .map_or(row.player.team_id.as_str(), |t| t.short_name.as_str()),
            row.value
        );
    }
}

fn print_scorecard(snapshot: &LeagueSnapshot, match_id: &str) -> Result<()> {
    let Some(fixture) = snapshot.fixture(&match_id.into()) else {
        bail!("No match with id {}", match_id);
    };
    let board = MatchScoreboard::new(fixture, &snapshot.players);

    println!(
        "{} vs {} ({}) at {}, {}",
        snapshot.team_name(&fixture.team1),
        snapshot.team_name(&fixture.team2),
        fixture.status(),
        fixture.venue,
        fixture.date.format("%Y-%m-%d %H:%M"),
    );
    for team in [&fixture.team1, &fixture.team2] {
        println!("  {:<30} {}", snapshot.team_name(team), board.score_line_for(team));
    }
    if let Some(result) = fixture.result() {
        println!("  {}", result);
    }

    for innings in board.innings_views() {
        println!();
        println!(
            "Innings {}: {} {}{}",
            innings.number,
            snapshot.team_name(innings.batting_team),
            innings.score,
            if innings.is_chasing { " (chasing)" } else { "" }
        );
        for bat in &innings.batting {
            println!(
                "  {:<25} {:<25} {:>3} ({:>3}b, {}x4, {}x6) SR {:.2}",
                bat.player_name,
                bat.dismissal,
                bat.runs,
                bat.balls,
                bat.fours,
                bat.sixes,
                bat.strike_rate
            );
        }
        for bowl in &innings.bowling {
            println!(
                "  {:<25} {}-{}-{}-{} econ {:.2}",
                bowl.player_name, bowl.overs, bowl.maidens, bowl.runs, bowl.wickets, bowl.economy
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config {:?}", cli.config))?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_tracing(&config.log_level, cli.json_logs);
    tracing::info!("Starting cricket-league v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Serve {
            host,
            port,
            seed_only,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            let store = if seed_only {
                LeagueStore::seeded()?
            } else {
                LeagueStore::load(&storage)?
            };
            let addr = format!("{}:{}", config.server.host, config.server.port);
            let app = build_router(AppState::new(store, config));
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Serving API on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Standings => {
            let snapshot = LeagueStore::load(&storage)?.snapshot();
            print_standings(&snapshot, &config);
        }
        Commands::Leaders { stat, limit } => {
            let stat: Stat = stat.parse().map_err(anyhow::Error::msg)?;
            let snapshot = LeagueStore::load(&storage)?.snapshot();
            print_leaders(&snapshot, stat, limit.unwrap_or(config.league.stats_leaders));
        }
        Commands::Scorecard { match_id } => {
            let snapshot = LeagueStore::load(&storage)?.snapshot();
            print_scorecard(&snapshot, &match_id)?;
        }
        Commands::Export => {
            let written = jsonl::save_snapshot(&storage, &seed::league()?)?;
            println!("Wrote {} records to {:?}", written, storage.league_dir());
        }
        Commands::Check => {
            let snapshot = LeagueStore::load(&storage)?.snapshot();
            let issues = find_issues(&snapshot);
            if issues.is_empty() {
                println!("No data issues found");
            } else {
                for issue in &issues {
                    println!("- {}", issue);
                }
                bail!("{} data issue(s) found", issues.len());
            }
        }
    }

    Ok(())
}

//! Tic-tac-toe - terminal front end
//!
//! Plays in a terminal UI by default, or runs headless simulations.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use std::path::Path;
use tic_tac_toe::{Difficulty, SessionConfig, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Config file read by `play` when `--config` is not given.
const DEFAULT_CONFIG: &str = "tic_tac_toe.toml";

/// Log file written while the TUI owns the terminal.
const LOG_FILE: &str = "tic_tac_toe.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        None => run_play(PlayArgs::default()).await,
        Some(Command::Play(args)) => run_play(args).await,
        Some(Command::Simulate {
            games,
            difficulty,
            seed,
            json,
        }) => run_simulate(games, difficulty, seed, json),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the terminal UI
async fn run_play(args: PlayArgs) -> Result<()> {
    // Log to a file so output doesn't tear the TUI
    let log_file = std::fs::File::create(LOG_FILE)
        .with_context(|| format!("Failed to create log file {}", LOG_FILE))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let config = load_config(&args)?;
    info!(?config, "Starting tic-tac-toe TUI");
    tui::run(config).await
}

/// Resolves the session config from the file and command-line overrides.
#[instrument(skip_all)]
fn load_config(args: &PlayArgs) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::load_or_default(Path::new(DEFAULT_CONFIG))?,
    };

    if args.opponent {
        config = config.with_opponent_enabled(true);
    }
    if let Some(difficulty) = args.difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(mark) = args.computer_mark {
        config = config.with_computer_mark(mark);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

/// Run headless games and print the tally
fn run_simulate(games: u32, difficulty: Difficulty, seed: Option<u64>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    info!(games, %difficulty, ?seed, "Starting simulation");
    let tally = simulate(games, difficulty, seed);

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("Difficulty: {}", tally.difficulty);
        println!("Games:      {}", tally.games);
        println!("Wins:       {}", tally.wins);
        println!("Draws:      {}", tally.draws);
        println!("Losses:     {}", tally.losses);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tic_tac_toe::Mark;

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("session.toml");
        std::fs::write(&path, "difficulty = \"medium\"\nauto_reset_delay_ms = 250\n").unwrap();

        let args = PlayArgs {
            config: Some(path),
            opponent: true,
            computer_mark: Some(Mark::X),
            ..PlayArgs::default()
        };
        let config = load_config(&args).unwrap();

        assert_eq!(*config.difficulty(), Difficulty::Medium);
        assert_eq!(*config.auto_reset_delay_ms(), 250);
        assert!(*config.opponent_enabled());
        assert_eq!(*config.computer_mark(), Mark::X);
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let args = PlayArgs {
            config: Some(PathBuf::from("/nonexistent/tic_tac_toe.toml")),
            ..PlayArgs::default()
        };
        assert!(load_config(&args).is_err());
    }
}

//! Command-line interface for tic_tac_toe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tic_tac_toe::{Difficulty, Mark};

/// Tic-tac-toe in the terminal, with an optional computer opponent
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe")]
#[command(about = "Tic-tac-toe with a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Run headless games of the computer against a random player
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// Difficulty the computer plays at
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for the terminal UI.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Path to a TOML session config (defaults to tic_tac_toe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with the computer opponent enabled
    #[arg(long)]
    pub opponent: bool,

    /// Starting difficulty: easy, medium, or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Mark the computer plays
    #[arg(long)]
    pub computer_mark: Option<Mark>,

    /// Seed for the random strategy
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::try_parse_from(["tic_tac_toe"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_play_flags_parse() {
        let cli = Cli::try_parse_from([
            "tic_tac_toe",
            "play",
            "--opponent",
            "--difficulty",
            "hard",
            "--computer-mark",
            "x",
            "--seed",
            "9",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Play(args)) => {
                assert!(args.opponent);
                assert_eq!(args.difficulty, Some(Difficulty::Hard));
                assert_eq!(args.computer_mark, Some(Mark::X));
                assert_eq!(args.seed, Some(9));
            }
            other => panic!("Expected play, got {:?}", other),
        }
    }

    #[test]
    fn test_simulate_defaults() {
        let cli = Cli::try_parse_from(["tic_tac_toe", "simulate"]).unwrap();
        match cli.command {
            Some(Command::Simulate {
                games,
                difficulty,
                seed,
                json,
            }) => {
                assert_eq!(games, 1000);
                assert_eq!(difficulty, Difficulty::Hard);
                assert_eq!(seed, None);
                assert!(!json);
            }
            other => panic!("Expected simulate, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(Cli::try_parse_from(["tic_tac_toe", "simulate", "-d", "impossible"]).is_err());
    }
}

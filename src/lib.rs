//! Tic-tac-toe with a computer opponent.
//!
//! The library holds everything below the presentation layer:
//!
//! - **Games**: board, outcome evaluation, and the single-round engine
//! - **Opponent**: random, heuristic, and minimax strategies
//! - **Session**: scores, auto-reset, and delayed computer moves on
//!   cancellable timers, driven by a single tokio task
//! - **Simulation**: headless computer-versus-random play
//!
//! # Example
//!
//! ```no_run
//! use tic_tac_toe::{SessionConfig, spawn_session};
//!
//! # async fn example() -> Result<(), tic_tac_toe::SessionError> {
//! let config = SessionConfig::default().with_opponent_enabled(true);
//! let (handle, _task) = spawn_session(&config);
//! handle.apply_move(4)?;
//! let snapshot = handle.snapshot().await?;
//! println!("{}", snapshot.board.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod games;
mod opponent;
mod session;
mod simulation;

// Crate-level exports - Configuration and errors
pub use config::SessionConfig;
pub use error::{ConfigError, SessionError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::invariants;
pub use games::tictactoe::rules;
pub use games::tictactoe::{Board, Game, Mark, Move, MoveError, Outcome, Position, Square, evaluate};

// Crate-level exports - Computer opponent
pub use opponent::{
    Difficulty, HeuristicStrategy, MinimaxStrategy, RandomStrategy, Strategy, best_move,
    best_scored_move, choose_move, completing_move,
};

// Crate-level exports - Session management
pub use session::{
    GameSession, Scores, SessionHandle, Snapshot, Timer, TimerAction, TimerId, TimerQueue,
    spawn_session,
};

// Crate-level exports - Simulation
pub use simulation::{Tally, play_game, simulate};

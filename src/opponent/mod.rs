//! Computer opponent strategies.
//!
//! Three interchangeable policies sit behind the [`Strategy`] trait and
//! are selected by [`Difficulty`]:
//!
//! - **Easy**: uniform pick among empty squares
//! - **Medium**: win if possible, else block, else random
//! - **Hard**: full minimax search, never loses
//!
//! Every strategy reads the board through the same rules module the
//! session uses, and none of them mutates the board it is given.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::{HeuristicStrategy, completing_move};
pub use minimax::{MinimaxStrategy, best_move, best_scored_move};
pub use random::RandomStrategy;

use crate::games::tictactoe::{Board, Mark, Position};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, instrument};

/// A policy that picks the computer's next square.
pub trait Strategy: Send + Sync {
    /// Picks a square for `computer`, or `None` when no legal move exists.
    fn choose(&self, board: &Board, computer: Mark, rng: &mut dyn RngCore) -> Option<Position>;

    /// Short name for logs and status lines.
    fn name(&self) -> &'static str;
}

/// Difficulty tier of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random moves.
    #[default]
    Easy,
    /// Takes wins and blocks threats, otherwise random.
    Medium,
    /// Optimal minimax play.
    Hard,
}

impl Difficulty {
    /// Returns the strategy for this tier.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Difficulty::Easy => &RandomStrategy,
            Difficulty::Medium => &HeuristicStrategy,
            Difficulty::Hard => &MinimaxStrategy,
        }
    }

    /// The next tier, wrapping from hard back to easy.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Asks the strategy for `difficulty` to pick a move for `computer`.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn choose_move(
    difficulty: Difficulty,
    board: &Board,
    computer: Mark,
    rng: &mut dyn RngCore,
) -> Option<Position> {
    let strategy = difficulty.strategy();
    let choice = strategy.choose(board, computer, rng);
    debug!(strategy = strategy.name(), ?choice, "Computer chose move");
    choice
}

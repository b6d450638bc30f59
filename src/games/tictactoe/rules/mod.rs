//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are kept apart from
//! board storage so the engine, the session, and the computer opponent
//! all judge positions the same way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, check_winner, winning_line};

use super::{Board, Outcome};

/// Evaluates a board: a completed line wins, a full board draws,
/// anything else is still in progress.
pub fn evaluate(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(mark) => Outcome::Winner(mark),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

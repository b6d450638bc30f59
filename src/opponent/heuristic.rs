//! Medium tier: take a win, else block one, else play randomly.

use super::Strategy;
use super::random::RandomStrategy;
use crate::games::tictactoe::{Board, Mark, Outcome, Position, evaluate};
use rand::RngCore;

/// Wins when it can, blocks when it must, otherwise random.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

/// Returns the first empty square (ascending index) that would complete
/// a line for `mark`.
///
/// Each candidate is tried on a copy of the board.
pub fn completing_move(board: &Board, mark: Mark) -> Option<Position> {
    board
        .empty_positions()
        .into_iter()
        .find(|&pos| evaluate(&board.with(pos, mark)) == Outcome::Winner(mark))
}

impl Strategy for HeuristicStrategy {
    fn choose(&self, board: &Board, computer: Mark, rng: &mut dyn RngCore) -> Option<Position> {
        completing_move(board, computer)
            .or_else(|| completing_move(board, computer.opponent()))
            .or_else(|| RandomStrategy::pick(board, rng))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

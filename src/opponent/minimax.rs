//! Hard tier: exhaustive minimax search.
//!
//! Terminal positions score `10 - depth` for a computer win, `depth - 10`
//! for an opponent win and `0` for a draw, where `depth` counts the plies
//! played since the search started. Quicker wins therefore outrank slow
//! ones and a loss that can be postponed scores better than an early one.
//!
//! Boards are `Copy`, so each ply works on its own value and no
//! backtracking is needed. Candidates are examined in ascending index
//! order and only a strictly better score replaces the current best, so
//! ties resolve to the lowest index.

use super::Strategy;
use crate::games::tictactoe::{Board, Mark, Outcome, Position, evaluate};
use rand::RngCore;
use tracing::instrument;

/// Optimal play by full game-tree search.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

/// Returns the best square for `computer` together with its score.
///
/// `None` when the board is already decided or full.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn best_scored_move(board: &Board, computer: Mark) -> Option<(Position, i32)> {
    if evaluate(board).is_decided() {
        return None;
    }

    let mut best: Option<(Position, i32)> = None;
    for pos in empty_squares(board) {
        let score = minimax(&board.with(pos, computer), computer, 1, false);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    best
}

/// Returns the best square for `computer`.
pub fn best_move(board: &Board, computer: Mark) -> Option<Position> {
    best_scored_move(board, computer).map(|(pos, _)| pos)
}

fn empty_squares(board: &Board) -> impl Iterator<Item = Position> + '_ {
    Position::ALL.into_iter().filter(move |pos| board.is_empty(*pos))
}

fn minimax(board: &Board, computer: Mark, depth: i32, maximizing: bool) -> i32 {
    match evaluate(board) {
        Outcome::Winner(mark) if mark == computer => return 10 - depth,
        Outcome::Winner(_) => return depth - 10,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mark = if maximizing {
        computer
    } else {
        computer.opponent()
    };
    let scores = empty_squares(board)
        .map(|pos| minimax(&board.with(pos, mark), computer, depth + 1, !maximizing));

    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(0)
}

impl Strategy for MinimaxStrategy {
    fn choose(&self, board: &Board, computer: Mark, _rng: &mut dyn RngCore) -> Option<Position> {
        best_move(board, computer)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn board_from(cells: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (sq, c) in squares.iter_mut().zip(cells.chars()) {
            *sq = match c {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_immediate_win_scores_nine() {
        let board = board_from("XX_OO____");
        assert_eq!(
            best_scored_move(&board, Mark::O),
            Some((Position::MiddleRight, 9))
        );
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        // X threatens the top row; anything but a block loses at depth 2.
        let board = board_from("XX__O____");
        assert_eq!(best_move(&board, Mark::O), Some(Position::TopRight));
    }

    #[test]
    fn test_decided_board_has_no_move() {
        let board = board_from("XXXOO____");
        assert_eq!(best_move(&board, Mark::O), None);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_from("XOXOXXOXO");
        assert_eq!(best_move(&board, Mark::X), None);
    }

    #[test]
    fn test_last_square_is_taken() {
        let board = board_from("XOXOXXOX_");
        let (pos, score) = best_scored_move(&board, Mark::O).unwrap();
        assert_eq!(pos, Position::BottomRight);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_wins_instead_of_blocking() {
        // X threatens 7, but O can finish the middle row first.
        let board = board_from("X__OO_X_X");
        assert_eq!(
            best_scored_move(&board, Mark::O),
            Some((Position::MiddleRight, 9))
        );
    }
}

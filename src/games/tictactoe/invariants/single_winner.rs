//! Single winner invariant: at most one mark owns a complete line.

use super::super::rules::WIN_LINES;
use super::super::{Game, Mark, Square};
use super::Invariant;

/// Invariant: X and O never both complete a line.
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    fn has_line(game: &Game, mark: Mark) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&p| game.board().get(p) == Square::Occupied(mark)))
    }
}

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        !(Self::has_line(game, Mark::X) && Self::has_line(game, Mark::O))
    }

    fn description() -> &'static str {
        "At most one mark completes a line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Position};

    #[test]
    fn test_one_winner_holds() {
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::X)
            .with(Position::TopRight, Mark::X);
        let game = Game::from_parts(board, Mark::X, Vec::new());
        assert!(SingleWinnerInvariant::holds(&game));
    }

    #[test]
    fn test_two_winners_violates() {
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::X)
            .with(Position::TopRight, Mark::X)
            .with(Position::BottomLeft, Mark::O)
            .with(Position::BottomCenter, Mark::O)
            .with(Position::BottomRight, Mark::O);
        let game = Game::from_parts(board, Mark::X, Vec::new());
        assert!(!SingleWinnerInvariant::holds(&game));
    }
}

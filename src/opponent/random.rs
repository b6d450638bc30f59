//! Easy tier: uniform choice among empty squares.

use super::Strategy;
use crate::games::tictactoe::{Board, Mark, Position};
use rand::{Rng, RngCore};

/// Picks any empty square with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    /// Uniform pick among the empty squares of `board`.
    pub fn pick(board: &Board, rng: &mut dyn RngCore) -> Option<Position> {
        let available = board.empty_positions();
        if available.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..available.len());
        Some(available[idx])
    }
}

impl Strategy for RandomStrategy {
    fn choose(&self, board: &Board, _computer: Mark, rng: &mut dyn RngCore) -> Option<Position> {
        Self::pick(board, rng)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_squares([Square::Occupied(Mark::X); 9]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(RandomStrategy.choose(&board, Mark::O, &mut rng), None);
    }

    #[test]
    fn test_only_empty_squares_are_picked() {
        let mut squares = [Square::Occupied(Mark::X); 9];
        squares[2] = Square::Empty;
        squares[6] = Square::Empty;
        let board = Board::from_squares(squares);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let pos = RandomStrategy.choose(&board, Mark::O, &mut rng).unwrap();
            assert!(matches!(pos, Position::TopRight | Position::BottomLeft));
        }
    }

    #[test]
    fn test_every_empty_square_is_reachable() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 9];
        for _ in 0..500 {
            let pos = RandomStrategy.choose(&board, Mark::O, &mut rng).unwrap();
            seen[pos.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}

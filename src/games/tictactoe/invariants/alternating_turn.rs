//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, Mark};
use super::Invariant;

/// Invariant: marks alternate starting with X.
///
/// While the round is in progress the mark to move follows the same
/// pattern. A decided round keeps the mark that finished it.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.first().is_some_and(|m| m.mark != Mark::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        if game.outcome().is_decided() {
            return history.last().map(|m| m.mark) == Some(game.to_move());
        }

        let expected_next = if history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Move, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ] {
            game.place(pos).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_won_game_keeps_winner_to_move() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.place(pos).unwrap();
        }
        assert_eq!(game.to_move(), Mark::X);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let history = vec![
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::X, Position::Center),
        ];
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::Center, Mark::X);
        let game = Game::from_parts(board, Mark::O, history);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}

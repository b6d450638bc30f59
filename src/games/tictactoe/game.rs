//! Game engine for a single round of tic-tac-toe.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules;
use super::types::{Board, Mark, Outcome, Square};
use super::Position;
use tracing::{debug, error, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board and whose turn it is. The outcome is never cached:
/// [`Game::outcome`] evaluates the board every time it is asked, so it
/// cannot drift from what is actually on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Mark,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move. Only meaningful while in progress.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the moves played this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Places the current mark at `pos`.
    ///
    /// The turn only passes to the other mark while play continues,
    /// so a decided game still reports the mark that finished it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the round is decided and
    /// [`MoveError::SquareOccupied`] when `pos` is taken.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.outcome().is_decided() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.to_move;
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(Move::new(mark, pos));

        let outcome = self.outcome();
        if !outcome.is_decided() {
            self.to_move = mark.opponent();
        }
        debug!(%outcome, "Move applied");
        self.assert_invariants();
        Ok(outcome)
    }

    /// Panics in debug builds if any game invariant is broken.
    fn assert_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = GameInvariants::check_all(self) {
            for v in &violations {
                error!(invariant = %v.description, "Invariant violated");
            }
            panic!("{} game invariant(s) violated", violations.len());
        }
    }

    /// Clears the board and gives the first move back to X.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Mark::X;
        self.history.clear();
    }
}

#[cfg(test)]
impl Game {
    /// Builds a game from raw parts, bypassing move validation.
    pub(crate) fn from_parts(board: Board, to_move: Mark, history: Vec<Move>) -> Self {
        Self {
            board,
            to_move,
            history,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

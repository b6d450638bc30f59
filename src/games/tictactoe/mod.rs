//! Tic-tac-toe: board, rules, and the single-round game engine.

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use rules::evaluate;
pub use types::{Board, Mark, Outcome, Square};

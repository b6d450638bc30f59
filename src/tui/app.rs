//! Application state and logic.

use super::input::Action;
use tic_tac_toe::{Outcome, Position, SessionError, SessionHandle, Snapshot};
use tracing::debug;

/// Main application state.
///
/// The session owns the game; the app only keeps the latest snapshot
/// plus what is purely local to the terminal, like the cursor.
pub struct App {
    snapshot: Snapshot,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates the app from the session's current snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Latest snapshot received from the session.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Replaces the snapshot after the session published a change.
    pub fn update(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
    }

    /// Carries out `action`, forwarding game commands to the session.
    pub fn handle(&mut self, action: Action, session: &SessionHandle) -> Result<(), SessionError> {
        debug!(?action, "Handling action");
        match action {
            Action::MoveCursor(pos) => self.cursor = pos,
            Action::Place(pos) => {
                self.cursor = pos;
                session.apply_move(pos.index())?;
            }
            Action::ResetBoard => session.reset_board()?,
            Action::NewGame => session.reset_game()?,
            Action::ToggleOpponent => {
                session.set_opponent_enabled(!self.snapshot.opponent_enabled)?
            }
            Action::CycleDifficulty => session.set_difficulty(self.snapshot.difficulty.next())?,
            Action::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// One-line description of what is happening on the board.
    pub fn status_line(&self) -> String {
        let s = &self.snapshot;
        match s.outcome {
            Outcome::Winner(mark) => format!("{} wins! Next round starts shortly.", mark),
            Outcome::Draw => "Draw! Next round starts shortly.".to_string(),
            Outcome::InProgress if s.computer_thinking => {
                format!("Computer ({}) is thinking...", s.difficulty)
            }
            Outcome::InProgress => format!("{} to move", s.turn),
        }
    }

    /// Describes the opponent settings.
    pub fn opponent_line(&self) -> String {
        let s = &self.snapshot;
        if s.opponent_enabled {
            format!("Computer: {} as {}", s.difficulty, s.computer_mark)
        } else {
            format!("Computer: off ({} selected)", s.difficulty)
        }
    }

    /// Current scores.
    pub fn score_line(&self) -> String {
        format!("X: {}   O: {}", self.snapshot.scores.x, self.snapshot.scores.o)
    }
}

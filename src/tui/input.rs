//! Key bindings for the terminal UI.

use crossterm::event::KeyCode;
use tic_tac_toe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a square.
    MoveCursor(Position),
    /// Play a square.
    Place(Position),
    /// Clear the board, keeping scores.
    ResetBoard,
    /// Clear the board and the scores.
    NewGame,
    /// Turn the computer opponent on or off.
    ToggleOpponent,
    /// Switch to the next difficulty.
    CycleDifficulty,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action, given where the cursor is.
pub fn map_key(key: KeyCode, cursor: Position) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place(cursor)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Place),
        KeyCode::Char('r') => Some(Action::ResetBoard),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('c') => Some(Action::ToggleOpponent),
        KeyCode::Char('d') => Some(Action::CycleDifficulty),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the cursor one square with the arrow keys, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

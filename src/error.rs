//! Error types for the session and its configuration.

use derive_more::{Display, Error};
use tracing::instrument;

/// Errors surfaced by session operations.
///
/// Occupied squares and moves after the round is decided are not errors:
/// the session ignores them. Only caller contract violations show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// Square index outside 0-8.
    #[display("Square index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// The session task has stopped.
    #[display("Session is closed")]
    Closed,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

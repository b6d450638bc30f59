//! Session management: state machine, timers, and the task that runs them.

mod runner;
mod state;
mod timer;

pub use runner::{SessionHandle, spawn_session};
pub use state::{GameSession, Scores, Snapshot};
pub use timer::{Timer, TimerAction, TimerId, TimerQueue};

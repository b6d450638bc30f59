//! Drives a [`GameSession`] on a single tokio task.
//!
//! The task owns the session outright. Commands arrive over a channel
//! and timers are slept on inside the same `select!`, so every state
//! change happens on one logical thread and no locking is needed.

use super::state::{GameSession, Snapshot};
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::games::tictactoe::{Mark, Position};
use crate::opponent::Difficulty;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument};

/// Requests sent to the session task.
#[derive(Debug)]
enum Command {
    ApplyMove(usize),
    ResetBoard,
    ResetGame,
    SetOpponentEnabled(bool),
    SetDifficulty(Difficulty),
    SetComputerMark(Mark),
    Snapshot(oneshot::Sender<Snapshot>),
    Shutdown,
}

/// Cloneable handle to a running session task.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Command>,
    updates: watch::Receiver<Snapshot>,
}

/// Spawns the session task on the current tokio runtime.
#[instrument(skip(config))]
pub fn spawn_session(config: &SessionConfig) -> (SessionHandle, JoinHandle<()>) {
    let session = GameSession::new(config);
    let updates = session.subscribe();
    let (commands, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run(session, rx));
    (SessionHandle { commands, updates }, task)
}

impl SessionHandle {
    /// Plays the square at `index` for the human player.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidIndex`] for indices outside 0-8, checked
    /// before anything is sent; [`SessionError::Closed`] once the task
    /// has stopped.
    pub fn apply_move(&self, index: usize) -> Result<(), SessionError> {
        if Position::from_index(index).is_none() {
            return Err(SessionError::InvalidIndex(index));
        }
        self.send(Command::ApplyMove(index))
    }

    /// Clears the board, keeping scores.
    pub fn reset_board(&self) -> Result<(), SessionError> {
        self.send(Command::ResetBoard)
    }

    /// Clears the board and the scores.
    pub fn reset_game(&self) -> Result<(), SessionError> {
        self.send(Command::ResetGame)
    }

    /// Turns the computer opponent on or off.
    pub fn set_opponent_enabled(&self, enabled: bool) -> Result<(), SessionError> {
        self.send(Command::SetOpponentEnabled(enabled))
    }

    /// Selects the difficulty for the next computer move.
    pub fn set_difficulty(&self, difficulty: Difficulty) -> Result<(), SessionError> {
        self.send(Command::SetDifficulty(difficulty))
    }

    /// Chooses which mark the computer plays.
    pub fn set_computer_mark(&self, mark: Mark) -> Result<(), SessionError> {
        self.send(Command::SetComputerMark(mark))
    }

    /// Stops the session task.
    pub fn shutdown(&self) -> Result<(), SessionError> {
        self.send(Command::Shutdown)
    }

    /// Latest published snapshot, without waiting.
    pub fn current(&self) -> Snapshot {
        self.updates.borrow().clone()
    }

    /// Snapshot taken after every command sent so far has been handled.
    pub async fn snapshot(&self) -> Result<Snapshot, SessionError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Snapshot(tx))?;
        rx.await.map_err(|_| SessionError::Closed)
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.updates.clone()
    }

    fn send(&self, command: Command) -> Result<(), SessionError> {
        self.commands.send(command).map_err(|_| SessionError::Closed)
    }
}

async fn run(mut session: GameSession, mut commands: mpsc::UnboundedReceiver<Command>) {
    info!("Session task started");
    loop {
        let deadline = session.next_deadline();
        tokio::select! {
            biased;
            command = commands.recv() => match command {
                Some(Command::Shutdown) | None => break,
                Some(command) => handle(&mut session, command),
            },
            _ = wait_until(deadline) => {
                session.fire_due(Instant::now());
            }
        }
    }
    info!("Session task stopped");
}

fn handle(session: &mut GameSession, command: Command) {
    debug!(?command, "Handling command");
    match command {
        Command::ApplyMove(index) => {
            // Indices are validated by the handle before sending.
            let _ = session.apply_move(index);
        }
        Command::ResetBoard => session.reset_board(),
        Command::ResetGame => session.reset_game(),
        Command::SetOpponentEnabled(enabled) => session.set_opponent_enabled(enabled),
        Command::SetDifficulty(difficulty) => session.set_difficulty(difficulty),
        Command::SetComputerMark(mark) => session.set_computer_mark(mark),
        Command::Snapshot(reply) => {
            let _ = reply.send(session.snapshot());
        }
        Command::Shutdown => {}
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

//! The game session state machine.
//!
//! A session is either waiting for a move or holding a decided board
//! until it is reset. It owns the board, scores, and opponent settings,
//! and everything changes through the methods below. Delayed work
//! (auto-reset, computer moves) goes into a [`TimerQueue`]; the owner
//! calls [`GameSession::fire_due`] when time passes.

use super::timer::{TimerAction, TimerQueue};
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::games::tictactoe::{Board, Game, Mark, Outcome, Position, rules};
use crate::opponent::{Difficulty, choose_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info, instrument};

/// Rounds won by each mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Scores {
    /// Rounds won by X.
    pub x: u32,
    /// Rounds won by O.
    pub o: u32,
}

impl Scores {
    /// Score for `mark`.
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn increment(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }
}

/// Read-only view of a session, published after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Board contents.
    pub board: Board,
    /// Outcome derived from `board`.
    pub outcome: Outcome,
    /// Completed line when the round was won.
    pub winning_line: Option<[Position; 3]>,
    /// Cumulative scores.
    pub scores: Scores,
    /// Mark to move (meaningful while in progress).
    pub turn: Mark,
    /// Most recent move this round.
    pub last_move: Option<Position>,
    /// Whether the computer opponent is on.
    pub opponent_enabled: bool,
    /// Selected difficulty, kept while the opponent is off.
    pub difficulty: Difficulty,
    /// Mark played by the computer.
    pub computer_mark: Mark,
    /// A computer move is scheduled.
    pub computer_thinking: bool,
}

impl Snapshot {
    /// Serializes the snapshot for a presentation layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Tic-tac-toe session: rounds, scores, and the computer opponent.
#[derive(Debug)]
pub struct GameSession {
    game: Game,
    scores: Scores,
    opponent_enabled: bool,
    difficulty: Difficulty,
    computer_mark: Mark,
    timers: TimerQueue,
    rng: StdRng,
    auto_reset_delay: Duration,
    computer_move_delay: Duration,
    updates: watch::Sender<Snapshot>,
}

impl GameSession {
    /// Creates a session with an empty board and zero scores.
    #[instrument(skip(config))]
    pub fn new(config: &SessionConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        let game = Game::new();
        let initial = Snapshot {
            board: *game.board(),
            outcome: game.outcome(),
            winning_line: None,
            scores: Scores::default(),
            turn: game.to_move(),
            last_move: None,
            opponent_enabled: *config.opponent_enabled(),
            difficulty: *config.difficulty(),
            computer_mark: *config.computer_mark(),
            computer_thinking: false,
        };
        let (updates, _) = watch::channel(initial);

        let mut session = Self {
            game,
            scores: Scores::default(),
            opponent_enabled: *config.opponent_enabled(),
            difficulty: *config.difficulty(),
            computer_mark: *config.computer_mark(),
            timers: TimerQueue::new(),
            rng,
            auto_reset_delay: config.auto_reset_delay(),
            computer_move_delay: config.computer_move_delay(),
            updates,
        };
        session.schedule_computer_move_if_due(Instant::now());
        session.publish();
        info!(
            opponent = session.opponent_enabled,
            difficulty = %session.difficulty,
            computer = %session.computer_mark,
            "Session created"
        );
        session
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    /// Cumulative scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Mark to move.
    pub fn turn(&self) -> Mark {
        self.game.to_move()
    }

    /// Whether the computer opponent is on.
    pub fn opponent_enabled(&self) -> bool {
        self.opponent_enabled
    }

    /// Selected difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Mark played by the computer.
    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    /// True if a timer for `action` is waiting.
    pub fn is_pending(&self, action: TimerAction) -> bool {
        self.timers.is_pending(action)
    }

    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Builds a snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.game.board(),
            outcome: self.game.outcome(),
            winning_line: rules::winning_line(self.game.board()).map(|(_, line)| line),
            scores: self.scores,
            turn: self.game.to_move(),
            last_move: self.game.history().last().map(|m| m.position),
            opponent_enabled: self.opponent_enabled,
            difficulty: self.difficulty,
            computer_mark: self.computer_mark,
            computer_thinking: self.timers.is_pending(TimerAction::ComputerMove),
        }
    }

    /// Subscribes to snapshots published after every change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.updates.subscribe()
    }

    /// Plays the current mark at `index` on behalf of the human player.
    ///
    /// Occupied squares, decided rounds, and moves made while the
    /// computer is due to play are ignored without error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidIndex`] for indices outside 0-8.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), SessionError> {
        let pos = Position::from_index(index).ok_or(SessionError::InvalidIndex(index))?;
        if self.is_computer_turn() {
            debug!(position = %pos, "Move ignored: computer to play");
            return Ok(());
        }
        self.place(pos, Instant::now());
        Ok(())
    }

    /// Clears the board and gives the first move to X. Scores are kept.
    ///
    /// Cancels every pending timer, so nothing scheduled against the old
    /// board can fire against the new one.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.reset_board_at(Instant::now());
    }

    /// Resets the board and zeroes both scores.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.scores = Scores::default();
        info!("Scores cleared");
        self.reset_board();
    }

    /// Turns the computer opponent on or off.
    ///
    /// The selected difficulty survives toggling.
    #[instrument(skip(self))]
    pub fn set_opponent_enabled(&mut self, enabled: bool) {
        self.opponent_enabled = enabled;
        if enabled {
            self.schedule_computer_move_if_due(Instant::now());
        } else {
            self.timers.cancel_action(TimerAction::ComputerMove);
        }
        self.publish();
    }

    /// Selects the difficulty used for the next computer move.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.publish();
    }

    /// Chooses which mark the computer plays.
    #[instrument(skip(self))]
    pub fn set_computer_mark(&mut self, mark: Mark) {
        self.computer_mark = mark;
        self.timers.cancel_action(TimerAction::ComputerMove);
        self.schedule_computer_move_if_due(Instant::now());
        self.publish();
    }

    /// Fires every timer due at `now`, earliest first.
    ///
    /// Follow-up timers are scheduled relative to `now`, so a computer
    /// move after an auto-reset still waits its full delay. Returns how
    /// many timers fired.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(now) {
            debug!(action = %timer.action, "Timer fired");
            match timer.action {
                TimerAction::AutoReset => self.reset_board_at(now),
                TimerAction::ComputerMove => self.play_computer_move(now),
            }
            fired += 1;
        }
        fired
    }

    fn is_computer_turn(&self) -> bool {
        self.opponent_enabled
            && self.game.to_move() == self.computer_mark
            && !self.game.outcome().is_decided()
    }

    fn reset_board_at(&mut self, now: Instant) {
        let cancelled = self.timers.cancel_all();
        self.game.reset();
        debug!(cancelled, "Board reset");
        self.schedule_computer_move_if_due(now);
        self.publish();
    }

    fn play_computer_move(&mut self, now: Instant) {
        if !self.is_computer_turn() {
            debug!("Computer move skipped: not its turn");
            self.publish();
            return;
        }
        let board = *self.game.board();
        match choose_move(self.difficulty, &board, self.computer_mark, &mut self.rng) {
            Some(pos) => {
                self.place(pos, now);
            }
            None => {
                debug!("Computer has no legal move");
                self.publish();
            }
        }
    }

    /// The single move path shared by human input and the computer.
    fn place(&mut self, pos: Position, now: Instant) -> bool {
        let outcome = match self.game.place(pos) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, position = %pos, "Move ignored");
                return false;
            }
        };

        match outcome {
            Outcome::Winner(mark) => {
                self.scores.increment(mark);
                info!(winner = %mark, x = self.scores.x, o = self.scores.o, "Round won");
                self.schedule(TimerAction::AutoReset, now + self.auto_reset_delay);
            }
            Outcome::Draw => {
                info!("Round drawn");
                self.schedule(TimerAction::AutoReset, now + self.auto_reset_delay);
            }
            Outcome::InProgress => self.schedule_computer_move_if_due(now),
        }
        self.publish();
        true
    }

    fn schedule_computer_move_if_due(&mut self, now: Instant) {
        if self.is_computer_turn() && !self.timers.is_pending(TimerAction::ComputerMove) {
            self.schedule(TimerAction::ComputerMove, now + self.computer_move_delay);
        }
    }

    fn schedule(&mut self, action: TimerAction, deadline: Instant) {
        self.timers.schedule(action, deadline);
    }

    fn publish(&self) {
        self.updates.send_replace(self.snapshot());
    }
}

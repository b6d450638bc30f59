//! Cancellable one-shot timers.
//!
//! The queue only stores deadlines; it never sleeps. Whoever owns the
//! queue decides when to call [`TimerQueue::pop_due`], and a timer fires
//! only by being popped. Cancelling removes the entry, so a cancelled
//! timer has nothing left that could fire later.

use serde::Serialize;
use tokio::time::Instant;
use tracing::trace;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum TimerAction {
    /// Clear a decided board.
    AutoReset,
    /// Let the computer play.
    ComputerMove,
}

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    /// Handle used to cancel it.
    pub id: TimerId,
    /// What happens on expiry.
    pub action: TimerAction,
    /// When it expires.
    pub deadline: Instant,
}

/// Pending timers ordered by deadline on demand.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    pending: Vec<Timer>,
}

impl TimerQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to fire at `deadline`.
    pub fn schedule(&mut self, action: TimerAction, deadline: Instant) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Timer {
            id,
            action,
            deadline,
        });
        trace!(?id, %action, "Timer scheduled");
        id
    }

    /// Cancels one timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        before != self.pending.len()
    }

    /// Cancels every timer for `action`, returning how many were dropped.
    pub fn cancel_action(&mut self, action: TimerAction) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| t.action != action);
        before - self.pending.len()
    }

    /// Cancels everything.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// True if a timer for `action` is waiting.
    pub fn is_pending(&self, action: TimerAction) -> bool {
        self.pending.iter().any(|t| t.action == action)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|t| t.deadline).min()
    }

    /// Removes and returns the earliest timer due at `now`.
    ///
    /// Equal deadlines fire in scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Option<Timer> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(idx, _)| idx)?;
        Some(self.pending.remove(idx))
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

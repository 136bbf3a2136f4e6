#![forbid(unsafe_code)]

//! Cancellable, generation-tagged deadlines.
//!
//! [`ScheduledTask`] models a one-shot delayed callback without owning a
//! thread or a runtime timer. The owner arms it with the current instant and
//! a delay, then either polls it from its tick loop ([`poll`](ScheduledTask::poll))
//! or hands the returned [`TaskId`] to a host timer and calls
//! [`fire`](ScheduledTask::fire) when that timer elapses.
//!
//! # Invariants
//!
//! 1. A task fires at most once per [`arm`](ScheduledTask::arm).
//! 2. Re-arming or cancelling bumps the generation, so a [`TaskId`] from an
//!    earlier arm never fires into the current one.
//! 3. [`poll`](ScheduledTask::poll) never fires before the deadline.

use web_time::{Duration, Instant};

/// Identifies one arming of a [`ScheduledTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Raw generation counter.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A one-shot deadline that can be cancelled before it fires.
#[derive(Debug, Clone, Default)]
pub struct ScheduledTask {
    deadline: Option<Instant>,
    generation: u64,
}

impl ScheduledTask {
    /// Create an idle task.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deadline: None,
            generation: 0,
        }
    }

    /// Arm the task to fire `delay` after `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration) -> TaskId {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = Some(now + delay);
        TaskId(self.generation)
    }

    /// Cancel the pending deadline. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.deadline.take().is_some();
        if was_pending {
            self.generation = self.generation.wrapping_add(1);
        }
        was_pending
    }

    /// Whether a deadline is pending.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline, saturating at zero.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Fire the task if its deadline has passed.
    ///
    /// Returns the id of the arming that fired.
    pub fn poll(&mut self, now: Instant) -> Option<TaskId> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        Some(TaskId(self.generation))
    }

    /// Fire the task from an external timer.
    ///
    /// Only the current arming can fire; a stale id (from before a re-arm or
    /// a cancel) returns `false` and leaves the task untouched.
    pub fn fire(&mut self, id: TaskId) -> bool {
        if self.deadline.is_none() || id.0 != self.generation {
            return false;
        }
        self.deadline = None;
        true
    }
}

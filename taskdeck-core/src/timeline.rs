//! Keyed queue of delayed state transitions.
//!
//! The [`Timeline`] runs on a virtual clock that only moves when
//! [`advance`](Timeline::advance) is called. Effects are plain values, so
//! cancelling them is a matter of removing them from the queue, and dropping
//! the timeline drops every pending transition with it.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::task::TaskId;

/// A delayed state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Hide the pending validation warning.
    ClearWarning,
    /// Stop the list pulse.
    EndPulse,
    /// Move a task out of [`Phase::Entering`](crate::Phase::Entering).
    SettleEntry(TaskId),
    /// Mark a completing task as completed.
    FinishCompletion(TaskId),
    /// Drop an exiting task from the list.
    Remove(TaskId),
}

impl Effect {
    /// The task this effect is keyed by, if any.
    #[must_use]
    pub const fn task(self) -> Option<TaskId> {
        match self {
            Self::SettleEntry(id) | Self::FinishCompletion(id) | Self::Remove(id) => Some(id),
            Self::ClearWarning | Self::EndPulse => None,
        }
    }
}

#[derive(Debug)]
struct Entry {
    due: Duration,
    seq: u64,
    effect: Effect,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Pending effects ordered by deadline, then by scheduling order.
#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Entry>>,
}

impl Timeline {
    /// Creates an empty timeline at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Queues `effect` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, effect: Effect) {
        let entry = Entry {
            due: self.now.saturating_add(delay),
            seq: self.next_seq,
            effect,
        };
        self.next_seq += 1;
        tracing::trace!(?effect, due = ?entry.due, "effect scheduled");
        self.queue.push(Reverse(entry));
    }

    /// Cancels any queued copies of `effect`, then schedules it afresh.
    pub fn reschedule(&mut self, delay: Duration, effect: Effect) {
        self.cancel(effect);
        self.schedule(delay, effect);
    }

    /// Removes every queued copy of `effect`.
    pub fn cancel(&mut self, effect: Effect) {
        self.queue.retain(|Reverse(entry)| entry.effect != effect);
    }

    /// Removes every queued effect keyed by `id`.
    pub fn cancel_task(&mut self, id: TaskId) {
        self.queue
            .retain(|Reverse(entry)| entry.effect.task() != Some(id));
    }

    /// Returns `true` if `effect` is queued.
    #[must_use]
    pub fn is_scheduled(&self, effect: Effect) -> bool {
        self.queue
            .iter()
            .any(|Reverse(entry)| entry.effect == effect)
    }

    /// Moves the clock forward. Due effects are collected with
    /// [`pop_due`](Self::pop_due).
    pub const fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }

    /// Pops the earliest effect whose deadline has passed.
    pub fn pop_due(&mut self) -> Option<Effect> {
        let Reverse(head) = self.queue.peek()?;
        if head.due > self.now {
            return None;
        }
        self.queue.pop().map(|Reverse(entry)| entry.effect)
    }

    /// Deadline of the next queued effect.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Drops every queued effect.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Number of queued effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

//! Task model types.
//!
//! A [`Task`] only carries durable data. Animation state is tracked
//! separately as a [`Phase`] keyed by [`TaskId`].

use chrono::{DateTime, Local};
use thiserror::Error;

/// Errors produced when validating user input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TaskError {
    /// Input was empty or contained only whitespace.
    #[error("task text cannot be empty")]
    EmptyInput,
}

/// Checks that `text` has visible content.
///
/// # Errors
///
/// Returns [`TaskError::EmptyInput`] if `text` is empty after trimming.
pub fn validate_text(text: &str) -> Result<(), TaskError> {
    if text.trim().is_empty() {
        return Err(TaskError::EmptyInput);
    }
    Ok(())
}

/// Identifier of a task, assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Stable identifier.
    pub id: TaskId,
    /// User-supplied text, never blank.
    pub text: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Local time the task was added.
    pub created_at: DateTime<Local>,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: Local::now(),
        }
    }
}

/// Transient animation phase of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No transition in progress.
    #[default]
    Idle,
    /// Just added.
    Entering,
    /// Being marked as completed.
    Completing,
    /// Marked for removal; accepts no further mutations.
    Exiting,
}

/// Which input produced the pending warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// Blank text submitted from the add field.
    Add,
    /// Blank draft saved while editing.
    Edit,
}

impl Warning {
    /// Message shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Add => "Please enter a task before adding",
            Self::Edit => "Task cannot be empty",
        }
    }
}

/// Counts of active and completed tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Tasks not yet completed.
    pub active: usize,
    /// Completed tasks still in the list.
    pub completed: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} active task(s), {} completed",
            self.active, self.completed
        )
    }
}

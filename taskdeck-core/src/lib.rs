//! Task list state machine for `Taskdeck`.
//!
//! The [`TaskListController`] owns the ordered task list together with the
//! transient UI state (pending warning, active edit, per-task animation
//! phase). Delayed transitions are queued on a [`Timeline`] and fired when
//! the owner advances the controller clock.

pub mod controller;
pub mod task;
pub mod timeline;

pub use controller::{Command, TaskListController, Timings};
pub use task::{Phase, Summary, Task, TaskError, TaskId, Warning, validate_text};
pub use timeline::{Effect, Timeline};

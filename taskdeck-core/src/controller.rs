//! The task list controller.
//!
//! [`TaskListController`] is the single owner of task state. User intents
//! arrive as direct method calls or as [`Command`] values; delayed
//! transitions are queued on the internal [`Timeline`] and applied when the
//! owner calls [`advance`](TaskListController::advance).

use std::collections::HashMap;
use std::time::Duration;

use crate::task::{Phase, Summary, Task, TaskId, Warning, validate_text};
use crate::timeline::{Effect, Timeline};

/// Durations of the delayed transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long a validation warning stays visible.
    pub warning: Duration,
    /// How long a new task stays in [`Phase::Entering`].
    pub enter: Duration,
    /// How long a task stays in [`Phase::Completing`].
    pub complete: Duration,
    /// How long a task stays in [`Phase::Exiting`] before removal.
    pub exit: Duration,
    /// How long the list pulses after its length changes.
    pub pulse: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            warning: Duration::from_millis(3000),
            enter: Duration::from_millis(500),
            complete: Duration::from_millis(300),
            exit: Duration::from_millis(300),
            pulse: Duration::from_millis(500),
        }
    }
}

/// A user intent, as produced by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a task with the given text.
    Add(String),
    /// Remove a task after its exit transition.
    Delete(TaskId),
    /// Complete an open task, or remove a completed one.
    ToggleComplete(TaskId),
    /// Enter edit mode for a task.
    StartEdit {
        /// Task to edit.
        id: TaskId,
        /// Initial draft contents.
        text: String,
    },
    /// Replace the edit buffer.
    UpdateDraft(String),
    /// Commit the edit buffer to a task.
    SaveEdit(TaskId),
    /// Leave edit mode without saving.
    CancelEdit,
    /// Hide the validation warning.
    ClearWarning,
}

/// Owns the task list and its transient UI state.
#[derive(Debug)]
pub struct TaskListController {
    tasks: Vec<Task>,
    phases: HashMap<TaskId, Phase>,
    editing: Option<TaskId>,
    draft: String,
    warning: Option<Warning>,
    pulsing: bool,
    next_id: u64,
    timings: Timings,
    timeline: Timeline,
}

impl TaskListController {
    /// Creates an empty controller.
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            tasks: Vec::new(),
            phases: HashMap::new(),
            editing: None,
            draft: String::new(),
            warning: None,
            pulsing: false,
            next_id: 1,
            timings,
            timeline: Timeline::new(),
        }
    }

    /// Dispatches a [`Command`] to the matching operation.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Add(text) => {
                self.add_task(&text);
            }
            Command::Delete(id) => self.delete_task(id),
            Command::ToggleComplete(id) => self.toggle_complete(id),
            Command::StartEdit { id, text } => self.start_edit(id, &text),
            Command::UpdateDraft(text) => self.update_draft(text),
            Command::SaveEdit(id) => {
                self.save_edit(id);
            }
            Command::CancelEdit => self.cancel_edit(),
            Command::ClearWarning => self.clear_warning(),
        }
    }

    /// Appends a new task.
    ///
    /// Blank input raises [`Warning::Add`] and leaves the list untouched.
    /// Returns the new task's id on success.
    pub fn add_task(&mut self, input: &str) -> Option<TaskId> {
        if let Err(err) = validate_text(input) {
            tracing::debug!(%err, "add rejected");
            self.raise_warning(Warning::Add);
            return None;
        }

        let id = TaskId::from_raw(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, input.to_string()));
        self.phases.insert(id, Phase::Entering);
        self.timeline
            .schedule(self.timings.enter, Effect::SettleEntry(id));
        self.clear_warning();
        self.on_count_changed();
        tracing::debug!(%id, "task added");
        Some(id)
    }

    /// Starts the exit transition of a task; it is removed once the exit
    /// interval elapses. Calling this again while it is exiting is a no-op.
    pub fn delete_task(&mut self, id: TaskId) {
        if self.task(id).is_none() || self.phase(id) == Phase::Exiting {
            return;
        }
        self.timeline.cancel_task(id);
        self.phases.insert(id, Phase::Exiting);
        self.timeline.schedule(self.timings.exit, Effect::Remove(id));
        if self.editing == Some(id) {
            self.cancel_edit();
        }
        tracing::debug!(%id, "task exiting");
    }

    /// Completes an open task. A task that is already completed is deleted
    /// instead; completion cannot be undone.
    pub fn toggle_complete(&mut self, id: TaskId) {
        let Some(task) = self.task(id) else {
            return;
        };
        if task.completed {
            self.delete_task(id);
            return;
        }
        match self.phase(id) {
            Phase::Exiting | Phase::Completing => {}
            Phase::Idle | Phase::Entering => {
                self.phases.insert(id, Phase::Completing);
                self.timeline
                    .schedule(self.timings.complete, Effect::FinishCompletion(id));
            }
        }
    }

    /// Enters edit mode for `id` with `current_text` as the draft.
    ///
    /// Ignored for unknown, completed, completing, or exiting tasks.
    pub fn start_edit(&mut self, id: TaskId, current_text: &str) {
        let Some(task) = self.task(id) else {
            return;
        };
        if task.completed || matches!(self.phase(id), Phase::Completing | Phase::Exiting) {
            return;
        }
        self.editing = Some(id);
        self.draft = current_text.to_string();
    }

    /// Replaces the edit buffer and hides any pending warning.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.clear_warning();
    }

    /// Commits the draft to the task being edited.
    ///
    /// A blank draft raises [`Warning::Edit`] and keeps edit mode active.
    /// Returns `true` if the task text was updated.
    pub fn save_edit(&mut self, id: TaskId) -> bool {
        if self.editing != Some(id) || self.phase(id) == Phase::Exiting {
            return false;
        }
        if let Err(err) = validate_text(&self.draft) {
            tracing::debug!(%err, %id, "edit rejected");
            self.raise_warning(Warning::Edit);
            return false;
        }
        let draft = std::mem::take(&mut self.draft);
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.text = draft;
        self.editing = None;
        self.clear_warning();
        true
    }

    /// Leaves edit mode without touching any task.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft.clear();
    }

    /// Hides the pending warning and drops its scheduled clear.
    pub fn clear_warning(&mut self) {
        self.warning = None;
        self.timeline.cancel(Effect::ClearWarning);
    }

    /// Moves the clock forward by `dt`, firing every effect that comes due.
    pub fn advance(&mut self, dt: Duration) {
        self.timeline.advance(dt);
        while let Some(effect) = self.timeline.pop_due() {
            self.fire(effect);
        }
    }

    /// Drops every pending transition. Further calls to
    /// [`advance`](Self::advance) change nothing until new operations run.
    pub fn shutdown(&mut self) {
        tracing::debug!(pending = self.timeline.len(), "dropping pending effects");
        self.timeline.clear();
    }

    /// Tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Current animation phase of a task.
    #[must_use]
    pub fn phase(&self, id: TaskId) -> Phase {
        self.phases.get(&id).copied().unwrap_or_default()
    }

    /// Task currently being edited.
    #[must_use]
    pub const fn editing_id(&self) -> Option<TaskId> {
        self.editing
    }

    /// The edit buffer.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The pending warning, if any.
    #[must_use]
    pub const fn warning(&self) -> Option<Warning> {
        self.warning
    }

    /// Returns `true` while a validation warning should be shown.
    #[must_use]
    pub const fn pending_warning(&self) -> bool {
        self.warning.is_some()
    }

    /// Returns `true` while the list pulse is active.
    #[must_use]
    pub const fn is_pulsing(&self) -> bool {
        self.pulsing
    }

    /// Returns `true` if the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Active and completed counts.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Summary {
            active: self.tasks.len() - completed,
            completed,
        }
    }

    /// Number of queued transitions.
    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.timeline.len()
    }

    /// Time at which the next queued transition fires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timeline.next_deadline()
    }

    /// Controller clock.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Configured transition durations.
    #[must_use]
    pub const fn timings(&self) -> Timings {
        self.timings
    }

    fn raise_warning(&mut self, warning: Warning) {
        self.warning = Some(warning);
        self.timeline
            .reschedule(self.timings.warning, Effect::ClearWarning);
    }

    fn on_count_changed(&mut self) {
        if self.tasks.is_empty() {
            self.pulsing = false;
            self.timeline.cancel(Effect::EndPulse);
        } else {
            self.pulsing = true;
            self.timeline.reschedule(self.timings.pulse, Effect::EndPulse);
        }
    }

    fn remove(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            tracing::debug!(%id, "stale removal ignored");
            return;
        }
        self.phases.remove(&id);
        self.timeline.cancel_task(id);
        if self.editing == Some(id) {
            self.cancel_edit();
        }
        self.on_count_changed();
        tracing::debug!(%id, "task removed");
    }

    fn fire(&mut self, effect: Effect) {
        tracing::trace!(?effect, now = ?self.timeline.now(), "effect fired");
        match effect {
            Effect::ClearWarning => self.warning = None,
            Effect::EndPulse => self.pulsing = false,
            Effect::SettleEntry(id) => {
                if self.phase(id) == Phase::Entering {
                    self.phases.remove(&id);
                }
            }
            Effect::FinishCompletion(id) => {
                if self.phase(id) != Phase::Completing {
                    tracing::debug!(%id, "stale completion ignored");
                    return;
                }
                let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
                    return;
                };
                task.completed = true;
                self.phases.remove(&id);
                if self.editing == Some(id) {
                    self.cancel_edit();
                }
            }
            Effect::Remove(id) => self.remove(id),
        }
    }
}

impl Default for TaskListController {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

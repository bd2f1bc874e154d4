//! Application state and event handling.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskdeck_core::{Command, Task, TaskId, TaskListController, Timings};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// The add-task input (default).
    Input,
    /// The task list.
    List,
}

/// Main application state.
pub struct App {
    /// Text in the add-task input.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
    /// Cursor position in the edit draft (character index).
    pub draft_cursor: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Index of the selected task in the list.
    pub selected: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Task state.
    pub tasks: TaskListController,
    /// Maximum characters accepted in the input and edit buffers.
    pub max_task_title_len: usize,
    /// chrono format used for task creation times.
    pub timestamp_format: String,
}

impl App {
    /// Create an empty application.
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            input: String::new(),
            cursor_position: 0,
            draft_cursor: 0,
            focus: PanelFocus::Input,
            selected: 0,
            should_quit: false,
            tasks: TaskListController::new(timings),
            max_task_title_len: 256,
            timestamp_format: "%H:%M".to_string(),
        }
    }

    /// Set the maximum task text length.
    #[must_use]
    pub const fn with_max_task_title_len(mut self, len: usize) -> Self {
        self.max_task_title_len = len;
        self
    }

    /// Set the creation-time display format.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// The currently selected task, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.tasks().get(self.selected)
    }

    /// Handle a key event.
    ///
    /// Edits to local buffers (input text, cursor, selection, focus) are
    /// applied directly. Anything that changes task state is returned as a
    /// [`Command`] for [`dispatch`](Self::dispatch).
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        if let Some(id) = self.tasks.editing_id() {
            return self.handle_edit_key(id, key);
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return None;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::List => self.handle_list_key(key),
        }
    }

    /// Apply a command to the task state.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Add(text) => {
                if let Some(id) = self.tasks.add_task(&text) {
                    self.input.clear();
                    self.cursor_position = 0;
                    if let Some(idx) = self.tasks.tasks().iter().position(|t| t.id == id) {
                        self.selected = idx;
                    }
                }
            }
            Command::StartEdit { id, text } => {
                self.tasks.start_edit(id, &text);
                self.draft_cursor = self.tasks.draft().chars().count();
            }
            other => self.tasks.apply(other),
        }
        self.clamp_selection();
    }

    /// Advance the task clock by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.tasks.advance(dt);
        self.clamp_selection();
    }

    /// Handle key event when the add-task input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Enter => return Some(Command::Add(self.input.clone())),
            KeyCode::Char(c) if is_text_input(key.modifiers) => {
                if !self.enter_char(c) {
                    return None;
                }
            }
            KeyCode::Backspace => {
                if !self.delete_char() {
                    return None;
                }
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                return None;
            }
            KeyCode::Right => {
                if self.cursor_position < self.input.chars().count() {
                    self.cursor_position += 1;
                }
                return None;
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                return None;
            }
            KeyCode::End => {
                self.cursor_position = self.input.chars().count();
                return None;
            }
            _ => return None,
        }

        // Input text changed.
        self.tasks
            .pending_warning()
            .then_some(Command::ClearWarning)
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.tasks.tasks().len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char(' ' | 'x') => self.selected_task().map(|t| Command::ToggleComplete(t.id)),
            KeyCode::Char('d') | KeyCode::Delete => {
                self.selected_task().map(|t| Command::Delete(t.id))
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                let task = self.selected_task()?;
                if task.completed {
                    return None;
                }
                Some(Command::StartEdit {
                    id: task.id,
                    text: task.text.clone(),
                })
            }
            _ => None,
        }
    }

    /// Handle key event while a task is being edited.
    ///
    /// Cursor moves are local; text changes come back as
    /// [`Command::UpdateDraft`] carrying the whole new draft.
    fn handle_edit_key(&mut self, id: TaskId, key: KeyEvent) -> Option<Command> {
        let len = self.tasks.draft().chars().count();
        self.draft_cursor = self.draft_cursor.min(len);

        match key.code {
            KeyCode::Enter => Some(Command::SaveEdit(id)),
            KeyCode::Esc => Some(Command::CancelEdit),
            KeyCode::Char(c) if is_text_input(key.modifiers) => {
                if len >= self.max_task_title_len {
                    return None;
                }
                let mut next = self.tasks.draft().to_string();
                next.insert(byte_offset(&next, self.draft_cursor), c);
                self.draft_cursor += 1;
                Some(Command::UpdateDraft(next))
            }
            KeyCode::Backspace => {
                if self.draft_cursor == 0 {
                    return None;
                }
                let mut next = self.tasks.draft().to_string();
                next.remove(byte_offset(&next, self.draft_cursor - 1));
                self.draft_cursor -= 1;
                Some(Command::UpdateDraft(next))
            }
            KeyCode::Left => {
                self.draft_cursor = self.draft_cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.draft_cursor = (self.draft_cursor + 1).min(len);
                None
            }
            KeyCode::Home => {
                self.draft_cursor = 0;
                None
            }
            KeyCode::End => {
                self.draft_cursor = len;
                None
            }
            _ => None,
        }
    }

    /// Switch focus between the input and the list.
    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::List,
            PanelFocus::List => PanelFocus::Input,
        };
    }

    /// Insert a character at the cursor position. Returns `false` if the
    /// input is already at the length limit.
    fn enter_char(&mut self, c: char) -> bool {
        if self.input.chars().count() >= self.max_task_title_len {
            return false;
        }
        let at = byte_offset(&self.input, self.cursor_position);
        self.input.insert(at, c);
        self.cursor_position += 1;
        true
    }

    /// Delete the character before the cursor. Returns `false` if nothing
    /// was deleted.
    fn delete_char(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        let at = byte_offset(&self.input, self.cursor_position - 1);
        self.input.remove(at);
        self.cursor_position -= 1;
        true
    }

    /// Keep the selection inside the list.
    fn clamp_selection(&mut self) {
        let len = self.tasks.tasks().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

/// Plain or shifted characters count as text; control chords do not.
fn is_text_input(modifiers: KeyModifiers) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Byte offset of the `char_idx`-th character in `s`.
fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

//! Task list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use taskdeck_core::{Phase, Task, Warning};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the task list.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::List;

    let items: Vec<ListItem> = if app.tasks.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No tasks yet. Add one above!",
            theme::dimmed(),
        )))]
    } else {
        app.tasks
            .tasks()
            .iter()
            .map(|task| {
                if app.tasks.editing_id() == Some(task.id) {
                    edit_item(app)
                } else {
                    task_item(app, task)
                }
            })
            .collect()
    };

    // The edited row takes precedence so its draft and warning stay in view.
    let selected = app
        .tasks
        .editing_id()
        .and_then(|id| app.tasks.tasks().iter().position(|t| t.id == id))
        .or_else(|| (!app.tasks.is_empty()).then_some(app.selected));
    let mut state = ListState::default().with_selected(selected);

    let border_style = if app.tasks.is_pulsing() {
        theme::pulse()
    } else if is_focused {
        theme::highlighted()
    } else {
        theme::normal()
    };

    let block = Block::default()
        .title("Tasks")
        .borders(Borders::ALL)
        .border_style(border_style);

    let highlight = if is_focused {
        theme::selected()
    } else {
        Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    frame.render_stateful_widget(list, area, &mut state);
}

/// A regular (not editing) task row.
fn task_item<'a>(app: &App, task: &'a Task) -> ListItem<'a> {
    let phase = app.tasks.phase(task.id);
    let checkbox = match (task.completed, phase) {
        (_, Phase::Completing) => "[~]",
        (true, _) => "[✓]",
        (false, _) => "[ ]",
    };
    let text_style = if task.completed && phase == Phase::Idle {
        theme::completed()
    } else {
        theme::phase(phase)
    };

    let mut spans = vec![
        Span::styled(checkbox, theme::phase(phase)),
        Span::raw(" "),
        Span::styled(task.text.as_str(), text_style),
        Span::raw("  "),
        Span::styled(created_label(task, &app.timestamp_format), theme::dimmed()),
    ];

    if task.completed && app.tasks.editing_id().is_none() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(" ✓ Task completed ", theme::completed_badge()));
    }

    ListItem::new(Line::from(spans))
}

/// Creation time in the configured format, empty if the format is invalid.
fn created_label(task: &Task, format: &str) -> String {
    use std::fmt::Write;

    let mut label = String::new();
    if write!(label, "{}", task.created_at.format(format)).is_err() {
        label.clear();
    }
    label
}

/// The row of the task being edited: draft text with a cursor, plus the
/// edit warning while the draft is blank.
fn edit_item(app: &App) -> ListItem<'static> {
    let draft = app.tasks.draft();
    let split = draft
        .char_indices()
        .nth(app.draft_cursor)
        .map_or(draft.len(), |(i, _)| i);
    let (before, after) = draft.split_at(split);
    let mut lines = vec![Line::from(vec![
        Span::styled("✎ ", theme::highlighted()),
        Span::styled(before.to_string(), theme::normal()),
        Span::styled("█", theme::normal()),
        Span::styled(after.to_string(), theme::normal()),
    ])];

    if app.tasks.warning() == Some(Warning::Edit) && draft.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  ! {}", Warning::Edit.message()),
            theme::warning(),
        )));
    }

    ListItem::new(lines)
}

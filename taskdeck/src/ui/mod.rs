//! Terminal UI rendering.

pub mod input_bar;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input
            Constraint::Length(1), // Warning
            Constraint::Min(3),    // Tasks
            Constraint::Length(1), // Summary
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(Span::styled("Todo App", theme::title())))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    input_bar::render(frame, chunks[1], app);
    input_bar::render_warning(frame, chunks[2], app);
    task_list::render(frame, chunks[3], app);
    render_summary(frame, chunks[4], app);
    status_bar::render(frame, chunks[5], app);
}

/// Render the active/completed counts under the list.
fn render_summary(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    if app.tasks.is_empty() {
        return;
    }
    let summary = Paragraph::new(Line::from(Span::styled(
        app.tasks.summary().to_string(),
        theme::dimmed(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(summary, area);
}

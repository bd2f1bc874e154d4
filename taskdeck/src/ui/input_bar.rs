//! Add-task input box and its warning line.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use taskdeck_core::Warning;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the add-task input box.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input && app.tasks.editing_id().is_none();

    let mut display_text = app.input.clone();
    if is_focused {
        let at = display_text
            .char_indices()
            .nth(app.cursor_position)
            .map_or(display_text.len(), |(i, _)| i);
        display_text.insert(at, '█');
    }

    let input_line = if app.input.is_empty() && !is_focused {
        Line::from(Span::styled("Add a new task", theme::dimmed()))
    } else {
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let border_style = if app.tasks.warning() == Some(Warning::Add) {
        theme::warning_border()
    } else if is_focused {
        theme::highlighted()
    } else {
        theme::normal()
    };

    let block = Block::default()
        .title("New task (Enter to add)")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(input_line).block(block), area);
}

/// Render the add warning, if one is pending.
pub fn render_warning(frame: &mut Frame, area: Rect, app: &App) {
    let Some(warning @ Warning::Add) = app.tasks.warning() else {
        return;
    };
    let line = Line::from(vec![
        Span::styled(" ! ", theme::warning()),
        Span::styled(warning.message(), theme::warning()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

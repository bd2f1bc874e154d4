//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = if app.tasks.editing_id().is_some() {
        "Enter: save | Esc: cancel | Backspace: delete"
    } else {
        match app.focus {
            PanelFocus::Input => "Enter: add | Tab: switch panel | Esc: quit | ←→: move cursor",
            PanelFocus::List => {
                "↑↓/jk: navigate | Space: done | e: edit | d: remove | Tab: switch panel | Esc: quit"
            }
        }
    };

    let status_line = Line::from(vec![
        Span::styled(concat!("Taskdeck v", env!("CARGO_PKG_VERSION")), theme::bold()),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}

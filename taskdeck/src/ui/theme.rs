//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};
use taskdeck_core::Phase;

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Yellow;

/// Completed task color.
pub const SUCCESS: Color = Color::Green;

/// Validation warning color.
pub const ERROR: Color = Color::Red;

/// Color of a freshly added task.
pub const ENTERING: Color = Color::LightCyan;

/// Accent color for the title and the list pulse.
pub const ACCENT: Color = Color::Rgb(180, 120, 255);

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (timestamps, metadata).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Border style while the list pulses.
#[must_use]
pub fn pulse() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
}

/// Style for the app title.
#[must_use]
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Style for validation warnings.
#[must_use]
pub fn warning() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}

/// Border style of an input box showing a warning.
#[must_use]
pub fn warning_border() -> Style {
    Style::default().fg(ERROR)
}

/// Style for completed task text.
#[must_use]
pub fn completed() -> Style {
    Style::default()
        .fg(FG_SECONDARY)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Style for the "Task completed" badge.
#[must_use]
pub fn completed_badge() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(SUCCESS)
        .add_modifier(Modifier::BOLD)
}

/// Row style for a task in the given phase.
#[must_use]
pub fn phase(phase: Phase) -> Style {
    match phase {
        Phase::Idle => normal(),
        Phase::Entering => Style::default().fg(ENTERING).add_modifier(Modifier::BOLD),
        Phase::Completing => Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD),
        Phase::Exiting => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM),
    }
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

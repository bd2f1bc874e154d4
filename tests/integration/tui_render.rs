//! Rendering tests for the TUI using ratatui's `TestBackend`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use taskdeck::app::App;
use taskdeck::ui;
use taskdeck_core::Command;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 20;

/// Draws one frame and returns the screen as text, one line per row.
fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .chunks(usize::from(WIDTH))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn empty_list_shows_placeholder_and_no_summary() {
    let app = App::default();
    let screen = render(&app);
    assert!(screen.contains("Todo App"));
    assert!(screen.contains("No tasks yet. Add one above!"));
    assert!(!screen.contains("active task(s)"));
}

#[test]
fn add_warning_is_rendered() {
    let mut app = App::default();
    app.dispatch(Command::Add(String::new()));
    let screen = render(&app);
    assert!(screen.contains("Please enter a task before adding"));

    app.tick(Duration::from_secs(3));
    assert!(!render(&app).contains("Please enter a task before adding"));
}

#[test]
fn tasks_and_summary_are_rendered() {
    let mut app = App::default();
    app.dispatch(Command::Add("Buy milk".into()));
    app.dispatch(Command::Add("Walk dog".into()));
    let id = app.tasks.tasks()[0].id;
    app.dispatch(Command::ToggleComplete(id));
    app.tick(Duration::from_secs(1));

    let screen = render(&app);
    assert!(screen.contains("[✓] Buy milk"));
    assert!(screen.contains("[ ] Walk dog"));
    assert!(screen.contains("Task completed"));
    assert!(screen.contains("1 active task(s), 1 completed"));
}

#[test]
fn edit_row_shows_draft_and_edit_warning() {
    let mut app = App::default();
    app.dispatch(Command::Add("Buy milk".into()));
    let id = app.tasks.tasks()[0].id;
    app.dispatch(Command::StartEdit {
        id,
        text: "Buy milk".into(),
    });
    app.dispatch(Command::UpdateDraft("Buy oat milk".into()));
    app.handle_key_event(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
    assert!(render(&app).contains("✎ Buy oat milk█"));

    app.dispatch(Command::UpdateDraft(String::new()));
    app.dispatch(Command::SaveEdit(id));
    let screen = render(&app);
    assert!(screen.contains("Task cannot be empty"));
    assert!(!screen.contains("Please enter a task before adding"));
}

#[test]
fn status_bar_reflects_edit_mode() {
    let mut app = App::default();
    assert!(render(&app).contains("Enter: add"));

    app.dispatch(Command::Add("x".into()));
    let id = app.tasks.tasks()[0].id;
    app.dispatch(Command::StartEdit {
        id,
        text: "x".into(),
    });
    assert!(render(&app).contains("Enter: save"));
}

#[test]
fn draft_cursor_is_drawn_mid_text() {
    let mut app = App::default();
    app.dispatch(Command::Add("cat".into()));
    let id = app.tasks.tasks()[0].id;
    app.dispatch(Command::StartEdit {
        id,
        text: "cat".into(),
    });
    app.handle_key_event(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
    assert!(render(&app).contains("✎ █cat"));
}

#[test]
fn list_scrolls_to_selected_task() {
    let mut app = App::default();
    for i in 0..30 {
        app.dispatch(Command::Add(format!("task-{i}")));
    }
    app.tick(Duration::from_secs(1));
    app.handle_key_event(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    assert_eq!(app.selected, 29);

    let screen = render(&app);
    assert!(screen.contains("task-29"));
    assert!(!screen.contains("task-0 "));
}

#[test]
fn edited_row_stays_visible_in_long_list() {
    let mut app = App::default();
    for i in 0..30 {
        app.dispatch(Command::Add(format!("task-{i}")));
    }
    app.tick(Duration::from_secs(1));
    let id = app.tasks.tasks()[29].id;
    app.dispatch(Command::StartEdit {
        id,
        text: "task-29".into(),
    });
    app.dispatch(Command::UpdateDraft(String::new()));
    app.dispatch(Command::SaveEdit(id));

    let screen = render(&app);
    assert!(screen.contains("✎ █"));
    assert!(screen.contains("Task cannot be empty"));
}

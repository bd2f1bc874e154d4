//! Integration tests for keyboard-driven flows through `App`.
//!
//! Each test feeds key events the way the event loop does: a key is handled,
//! and the returned command (if any) is dispatched.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskdeck::app::{App, PanelFocus};
use taskdeck_core::{Command, Phase, Warning};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn press(app: &mut App, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if let Some(cmd) = app.handle_key_event(KeyEvent::new(code, modifiers)) {
        app.dispatch(cmd);
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add(app: &mut App, text: &str) {
    type_text(app, text);
    press(app, KeyCode::Enter);
}

fn settle(app: &mut App) {
    app.tick(Duration::from_secs(5));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn enter_adds_task_and_clears_input() {
    let mut app = App::default();
    add(&mut app, "Buy milk");

    assert_eq!(app.tasks.tasks().len(), 1);
    assert_eq!(app.tasks.tasks()[0].text, "Buy milk");
    assert!(app.input.is_empty());
    assert_eq!(app.cursor_position, 0);
}

#[test]
fn enter_on_blank_input_warns_and_keeps_input() {
    let mut app = App::default();
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.tasks.is_empty());
    assert_eq!(app.tasks.warning(), Some(Warning::Add));
    assert_eq!(app.input, "   ");
}

#[test]
fn typing_dismisses_warning() {
    let mut app = App::default();
    press(&mut app, KeyCode::Enter);
    assert!(app.tasks.pending_warning());

    let cmd = app.handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
    assert_eq!(cmd, Some(Command::ClearWarning));
    app.dispatch(cmd.unwrap());
    assert!(!app.tasks.pending_warning());
}

#[test]
fn typing_without_warning_emits_nothing() {
    let mut app = App::default();
    let cmd = app.handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
    assert_eq!(cmd, None);
    assert_eq!(app.input, "a");
}

#[test]
fn tab_switches_focus() {
    let mut app = App::default();
    assert_eq!(app.focus, PanelFocus::Input);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, PanelFocus::List);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus, PanelFocus::Input);
}

#[test]
fn list_navigation_and_completion() {
    let mut app = App::default();
    add(&mut app, "first");
    add(&mut app, "second");
    settle(&mut app);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.selected, 1);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.selected, 0);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected, 0);

    press(&mut app, KeyCode::Char(' '));
    let first = app.tasks.tasks()[0].id;
    assert_eq!(app.tasks.phase(first), Phase::Completing);
    settle(&mut app);
    assert!(app.tasks.task(first).unwrap().completed);

    // Toggling again removes it.
    press(&mut app, KeyCode::Char('x'));
    settle(&mut app);
    assert_eq!(app.tasks.tasks().len(), 1);
    assert_eq!(app.tasks.tasks()[0].text, "second");
    assert_eq!(app.selected, 0);
}

#[test]
fn delete_key_removes_selected_task() {
    let mut app = App::default();
    add(&mut app, "a");
    add(&mut app, "b");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('d'));
    let b = app.tasks.tasks()[1].id;
    assert_eq!(app.tasks.phase(b), Phase::Exiting);
    settle(&mut app);
    assert_eq!(app.tasks.tasks().len(), 1);
    assert_eq!(app.selected, 0);
}

#[test]
fn edit_save_flow() {
    let mut app = App::default();
    add(&mut app, "cat");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('e'));
    let id = app.tasks.tasks()[0].id;
    assert_eq!(app.tasks.editing_id(), Some(id));
    assert_eq!(app.tasks.draft(), "cat");

    // Keys now edit the draft, not the list.
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "rd");
    assert_eq!(app.tasks.draft(), "card");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.tasks.task(id).unwrap().text, "card");
    assert_eq!(app.tasks.editing_id(), None);
}

#[test]
fn edit_blank_save_warns_then_escape_cancels() {
    let mut app = App::default();
    add(&mut app, "x");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.tasks.warning(), Some(Warning::Edit));
    assert!(app.tasks.editing_id().is_some());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.tasks.editing_id(), None);
    assert_eq!(app.tasks.tasks()[0].text, "x");
    assert!(!app.should_quit);
}

#[test]
fn edit_not_offered_for_completed_task() {
    let mut app = App::default();
    add(&mut app, "done");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    settle(&mut app);
    let cmd = app.handle_key_event(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE));
    assert_eq!(cmd, None);
}

#[test]
fn escape_quits_outside_edit_mode() {
    let mut app = App::default();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);
}

#[test]
fn ctrl_c_quits_even_while_editing() {
    let mut app = App::default();
    add(&mut app, "x");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.should_quit);
}

#[test]
fn warning_clears_on_tick() {
    let mut app = App::default();
    press(&mut app, KeyCode::Enter);
    app.tick(Duration::from_millis(2999));
    assert!(app.tasks.pending_warning());
    app.tick(Duration::from_millis(1));
    assert!(!app.tasks.pending_warning());
}

#[test]
fn edit_cursor_moves_and_inserts_like_input() {
    let mut app = App::default();
    add(&mut app, "cat");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('e'));

    press(&mut app, KeyCode::Home);
    type_text(&mut app, "s");
    assert_eq!(app.tasks.draft(), "scat");

    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.tasks.draft(), "sct");

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    type_text(&mut app, "s");
    assert_eq!(app.tasks.draft(), "scts");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.tasks.tasks()[0].text, "scts");
}

//! `Taskdeck` — terminal task list library.

pub mod app;
pub mod config;
pub mod ui;

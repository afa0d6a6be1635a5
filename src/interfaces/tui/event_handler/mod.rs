//! Event handling for TUI
//!
//! Handles keyboard and paste events and delegates to per-screen handlers

mod main_screen;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, CurrentScreen};
use super::input_handler::handle_paste;

/// Handle one terminal event. Returns `true` when the app should exit.
pub async fn handle_event(app: &mut App, event: Event) -> std::io::Result<bool> {
    match event {
        // Windows 上按键会同时产生 Press 和 Release 事件
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key).await,
        Event::Paste(text) => {
            if app.current_screen == CurrentScreen::Main {
                app.start_editing();
                handle_paste(app, &text);
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keyboard input based on current screen
pub async fn handle_key_event(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.current_screen {
        CurrentScreen::Main => main_screen::handle_main_screen(app, key).await,
        CurrentScreen::Help => handle_help_screen(app, key.code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key.code),
    }
}

/// Handle help screen input
fn handle_help_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('?')
    ) {
        app.current_screen = CurrentScreen::Main;
    }
    Ok(false)
}

/// Handle exiting confirmation screen input
fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Ok(true), // Signal to exit
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
            Ok(false)
        }
        _ => Ok(false),
    }
}

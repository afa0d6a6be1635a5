//! Main screen: URL field and link list

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen, InputMode};
use crate::interfaces::tui::input_handler::{handle_backspace, handle_text_input};

pub async fn handle_main_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match app.input_mode {
        InputMode::Editing => handle_editing(app, key).await,
        InputMode::Browsing => handle_browsing(app, key.code).await,
    }
}

/// Typing into the URL field
async fn handle_editing(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Enter => app.shorten_input().await,
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => app.stop_editing(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            handle_text_input(app, c)
        }
        _ => {}
    }
    Ok(false)
}

/// Moving through the list
async fn handle_browsing(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Char('/') => {
            app.start_editing()
        }
        KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char('O') => app.visit_selected().await,
        KeyCode::Char('c') | KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_dark_mode(),
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        KeyCode::Esc => {
            app.error.clear();
            app.notice.clear();
        }
        _ => {}
    }
    Ok(false)
}

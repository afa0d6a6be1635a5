//! Input handling utilities
//!
//! Text editing for the URL field

use super::app::App;

/// Handle text character input
pub fn handle_text_input(app: &mut App, c: char) {
    app.url_input.push(c);
}

/// Handle backspace input
pub fn handle_backspace(app: &mut App) {
    app.url_input.pop();
}

/// Handle bracketed paste; line breaks are dropped so a copied line with a
/// trailing newline still validates.
pub fn handle_paste(app: &mut App, text: &str) {
    app.url_input
        .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
}

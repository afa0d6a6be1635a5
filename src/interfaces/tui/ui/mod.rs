// UI submodules
mod common;
mod exiting;
mod help;
mod main_screen;
pub mod widgets;

pub use common::{draw_error_banner, draw_footer, draw_input_section, draw_status_bar, draw_title_bar};
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use main_screen::draw_main_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

/// 错误横幅高度：两行文本 + 上下边框
const ERROR_BANNER_HEIGHT: u16 = 4;

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let theme = app.theme();
    frame.render_widget(Block::default().style(theme.base()), area);

    let error_height = if app.error.is_set() {
        ERROR_BANNER_HEIGHT
    } else {
        0
    };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(3),            // URL input
            Constraint::Length(error_height), // Error banner
            Constraint::Min(5),               // Link list
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Footer
        ])
        .split(area);

    draw_title_bar(frame, app, main_chunks[0]);
    draw_input_section(frame, app, main_chunks[1]);
    if app.error.is_set() {
        draw_error_banner(frame, app, main_chunks[2]);
    }
    draw_main_screen(frame, app, main_chunks[3]);
    draw_status_bar(frame, app, main_chunks[4]);
    draw_footer(frame, app, main_chunks[5]);

    // 弹窗覆盖在主界面之上
    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::Help => draw_help_screen(frame, app, area),
        CurrentScreen::Exiting => draw_exiting_screen(frame, app, area),
    }
}

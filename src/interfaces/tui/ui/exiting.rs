use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_exiting_screen(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let inner_area = Popup::new("Exit Confirmation", popup::EXITING)
        .theme_color(theme.accent)
        .background(theme.background)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "Are you sure you want to exit?",
            Style::default().fg(theme.text).bold(),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press [y] to quit, [n] to cancel",
            Style::default().fg(theme.muted),
        )]),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);

    frame.render_widget(paragraph, inner_area);
}

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_help_screen(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP)
        .theme_color(theme.primary)
        .background(theme.background)
        .render(frame, area);

    let section = |name: &'static str| {
        Line::from(vec![Span::styled(
            name,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )])
    };
    let entry = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<18}", keys), Style::default().fg(theme.primary)),
            Span::styled(desc, Style::default().fg(theme.text)),
        ])
    };

    let help_text = vec![
        Line::from(""),
        section("URL FIELD"),
        entry("type / paste", "Enter a long URL"),
        entry("Enter", "Shorten it"),
        entry("Esc, Tab", "Move focus to the list"),
        Line::from(""),
        section("LIST"),
        entry("Up/Down, j/k", "Navigate list"),
        entry("Home/End, g/G", "Jump to top/bottom"),
        entry("PageUp/PageDown", "Scroll 10 items"),
        entry("Enter, o", "Visit: count a click and open"),
        entry("c, y", "Copy short link"),
        entry("i, a, Tab", "Back to the URL field"),
        Line::from(""),
        section("GENERAL"),
        entry("t", "Toggle dark mode"),
        entry("?", "This help"),
        entry("q", "Quit"),
        entry("Ctrl+C", "Quit immediately"),
    ];

    frame.render_widget(Paragraph::new(help_text), inner_area);
}

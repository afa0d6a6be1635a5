use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::widgets::InputField;
use crate::interfaces::tui::app::{App, CurrentScreen, InputMode};
use crate::interfaces::tui::constants::{APP_TITLE, INPUT_PLACEHOLDER, labels};
use crate::interfaces::tui::theme::toggle_label;

/// Draw title bar with version, statistics and the theme toggle
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let title_text = vec![Line::from(vec![
        Span::styled(APP_TITLE, Style::default().fg(theme.primary).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.muted),
        ),
        Span::styled("| ", Style::default().fg(theme.muted)),
        Span::styled(
            format!("Links: {} ", app.service.len()),
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            format!("Clicks: {} ", app.service.total_clicks()),
            Style::default().fg(theme.success),
        ),
        Span::styled("| ", Style::default().fg(theme.muted)),
        Span::styled(
            format!("[t] {}", toggle_label(app.dark_mode)),
            Style::default().fg(theme.text),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.primary)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw the URL input field
pub fn draw_input_section(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing && app.current_screen == CurrentScreen::Main;

    InputField::new("URL", &app.url_input)
        .theme(app.theme())
        .active(editing)
        .placeholder(INPUT_PLACEHOLDER)
        .hint("[Enter] Shorten")
        .render(frame, area);

    if editing {
        // 光标放在输入内容末尾（边框占 1 列），与输入框的横向滚动一致
        let inner_width = area.width.saturating_sub(2) as usize;
        let offset = app
            .url_input
            .chars()
            .count()
            .min(inner_width.saturating_sub(1));
        frame.set_cursor_position((area.x + 1 + offset as u16, area.y + 1));
    }
}

/// Draw the transient error banner below the input
pub fn draw_error_banner(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.error.get() else {
        return;
    };
    let theme = app.theme();

    let banner = Paragraph::new(format!("{} {}", labels::ERROR, message))
        .style(Style::default().fg(theme.error).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.error)),
        );

    frame.render_widget(banner, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let (status_text, status_style) = if let Some(notice) = app.notice.get() {
        (
            notice.clone(),
            Style::default().fg(theme.highlight_fg).bg(theme.success).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(theme.primary))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let shortcuts = match (app.current_screen, app.input_mode) {
        (CurrentScreen::Main, InputMode::Editing) => vec![
            ("Enter", "Shorten", theme.success),
            ("Esc/Tab", "To List", theme.primary),
            ("Ctrl+C", "Quit", theme.accent),
        ],
        (CurrentScreen::Main, InputMode::Browsing) => vec![
            ("Up/Down", "Navigate", theme.primary),
            ("Enter", "Visit", theme.success),
            ("c", "Copy", theme.success),
            ("i", "Edit URL", theme.primary),
            ("t", "Theme", theme.accent),
            ("?", "Help", theme.primary),
            ("q", "Quit", theme.accent),
        ],
        (CurrentScreen::Help, _) => vec![("q/Esc", "Close", theme.error)],
        (CurrentScreen::Exiting, _) => vec![("y", "Yes", theme.success), ("n", "No", theme.error)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(theme.muted)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(theme.text),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

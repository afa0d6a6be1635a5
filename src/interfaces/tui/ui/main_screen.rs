use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::interfaces::tui::app::{App, InputMode};
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, labels};

/// Truncate a URL for the table, on a character boundary
pub fn truncate_url(url: &str, max_chars: usize) -> String {
    if url.chars().count() > max_chars {
        let head: String = url.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        url.to_string()
    }
}

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme();
    let browsing = app.input_mode == InputMode::Browsing;

    let border_style = if browsing {
        Style::default().fg(theme.primary)
    } else {
        Style::default().fg(theme.muted)
    };

    if app.service.is_empty() {
        let empty_text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "No short links yet",
                Style::default().fg(theme.muted).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Paste a URL above and press Enter",
                Style::default().fg(theme.muted),
            )]),
        ];

        let empty = Paragraph::new(empty_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .title("Short Links")
                    .title_style(Style::default().fg(theme.primary)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(empty, area);
        return;
    }

    let header_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Span::styled("Original", header_style),
        Span::styled("Short", header_style),
        Span::styled("Clicks", header_style),
        Span::raw(""),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .links()
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let copy_cell = if app.is_copied(index) {
                Span::styled(
                    labels::COPIED,
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!("[{}]", labels::COPY), Style::default().fg(theme.muted))
            };

            Row::new(vec![
                Span::styled(
                    truncate_url(&link.original, URL_TRUNCATE_LENGTH),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    link.short.clone(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
                Span::styled(
                    format!("{} {}", labels::CLICKS, link.clicks),
                    Style::default().fg(theme.success),
                ),
                copy_cell,
            ])
        })
        .collect();

    let title = format!("Short Links ({})", app.service.len());
    let highlight_style = if browsing {
        Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg)
    } else {
        Style::default()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),    // Original
            Constraint::Length(18), // Short
            Constraint::Length(10), // Clicks
            Constraint::Length(12), // Copy
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title)
            .title_style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(highlight_style)
    .highlight_symbol(if browsing { "▶ " } else { "  " })
    .column_spacing(1);

    app.table_state.select(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut app.table_state);
}

//! 单行输入框组件
//!
//! 激活时高亮边框，空值时显示占位符，右上角可带操作提示

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::theme::Theme;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("URL", &app.url_input)
///     .theme(app.theme())
///     .active(true)
///     .placeholder("Paste your long URL...")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    theme: Theme,
    is_active: bool,
    placeholder: Option<&'a str>,
    /// 显示在右上角的按键提示
    hint: Option<&'a str>,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            theme: Theme::LIGHT,
            is_active: false,
            placeholder: None,
            hint: None,
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    fn display_title(&self) -> String {
        let chars = self.value.chars().count();
        if chars > 0 {
            format!("{} ({} chars)", self.title, chars)
        } else {
            self.title.to_string()
        }
    }

    /// 空输入时返回占位符，样式为弱化色
    fn display_line(&self) -> Line<'a> {
        match (self.value.is_empty(), self.placeholder) {
            (true, Some(placeholder)) => Line::from(Span::styled(
                placeholder,
                Style::default()
                    .fg(self.theme.muted)
                    .add_modifier(Modifier::ITALIC),
            )),
            _ => Line::from(Span::styled(self.value, Style::default().fg(self.theme.text))),
        }
    }

    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.muted)
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.display_title())
            .border_style(self.border_style());

        if let Some(hint) = self.hint
            && self.is_active
        {
            block = block.title(
                Line::from(Span::styled(hint, Style::default().fg(self.theme.success)))
                    .alignment(Alignment::Right),
            );
        }

        // 过长时只显示末尾部分，保证光标所在处可见
        let inner_width = area.width.saturating_sub(2) as usize;
        let scroll = self
            .value
            .chars()
            .count()
            .saturating_sub(inner_width.saturating_sub(1));

        let input = Paragraph::new(self.display_line())
            .block(block)
            .scroll((0, scroll.min(u16::MAX as usize) as u16));
        frame.render_widget(input, area);
    }
}

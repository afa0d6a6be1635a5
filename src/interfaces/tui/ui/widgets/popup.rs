//! 通用弹窗容器
//!
//! 提供居中弹窗的辅助功能

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::interfaces::tui::constants::PopupSize;

/// 弹窗容器
pub struct Popup<'a> {
    title: &'a str,
    /// 标题与边框颜色
    color: Color,
    /// 弹窗底色，跟随当前主题
    background: Color,
    size: PopupSize,
    margin: Margin,
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str, size: PopupSize) -> Self {
        Self {
            title,
            color: Color::Cyan,
            background: Color::Reset,
            size,
            margin: Margin::new(2, 1),
        }
    }

    /// 设置主题颜色（同时设置标题和边框颜色）
    pub fn theme_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// 设置内边距
    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// 渲染弹窗并返回内部区域
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let popup_area = centered_rect(self.size.width, self.size.height, area);

        // 清除背景
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(self.title)
            .title_style(Style::default().fg(self.color).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.color))
            .style(Style::default().bg(self.background));
        frame.render_widget(block, popup_area);

        popup_area.inner(self.margin)
    }
}

/// 创建居中矩形
///
/// 根据百分比在给定区域中创建居中的矩形
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 50, area);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 25);
        assert_eq!(popup.y, 10);
    }
}

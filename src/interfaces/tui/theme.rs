//! 颜色主题
//!
//! 亮色/暗色两套配色，由标题栏的切换按钮控制

use ratatui::style::{Color, Style};

use super::constants::labels;

/// 配色方案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: Color::Reset,
        text: Color::Black,
        muted: Color::DarkGray,
        primary: Color::Blue,
        accent: Color::Magenta,
        success: Color::Green,
        error: Color::Red,
        highlight_bg: Color::LightBlue,
        highlight_fg: Color::Black,
    };

    pub const DARK: Theme = Theme {
        background: Color::Black,
        text: Color::White,
        muted: Color::Gray,
        primary: Color::Cyan,
        accent: Color::LightMagenta,
        success: Color::LightGreen,
        error: Color::LightRed,
        highlight_bg: Color::DarkGray,
        highlight_fg: Color::White,
    };

    pub fn for_mode(dark_mode: bool) -> Theme {
        if dark_mode { Self::DARK } else { Self::LIGHT }
    }

    /// 整个界面的底色
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }
}

/// 切换按钮文本：显示的是切换后的模式
pub fn toggle_label(dark_mode: bool) -> &'static str {
    if dark_mode {
        labels::TO_LIGHT
    } else {
        labels::TO_DARK
    }
}

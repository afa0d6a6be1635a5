//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// 原始 URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 50;

/// 翻页滚动步长
pub const PAGE_SCROLL_STEP: usize = 10;

/// 输入框占位符
pub const INPUT_PLACEHOLDER: &str = "Paste your long URL...";

/// 应用标题
pub const APP_TITLE: &str = "🚀URL Shortener";

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(70, 80);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// 按钮与标签文本
pub mod labels {
    /// 复制按钮
    pub const COPY: &str = "Copy";
    /// 复制成功反馈
    pub const COPIED: &str = "Copied ✅";
    /// 暗色模式下显示的切换按钮
    pub const TO_LIGHT: &str = "☀️ Light";
    /// 亮色模式下显示的切换按钮
    pub const TO_DARK: &str = "🌙 Dark";
    /// 点击数前缀
    pub const CLICKS: &str = "📊";
    /// 错误前缀
    pub const ERROR: &str = "❌";
}

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinilinkerError {
    Validation(String),
    NotFound(String),
    FileOperation(String),
    Serialization(String),
    Config(String),
    Clipboard(String),
    Launch(String),
    Terminal(String),
}

impl MinilinkerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            MinilinkerError::Validation(_) => "E001",
            MinilinkerError::NotFound(_) => "E002",
            MinilinkerError::FileOperation(_) => "E003",
            MinilinkerError::Serialization(_) => "E004",
            MinilinkerError::Config(_) => "E005",
            MinilinkerError::Clipboard(_) => "E006",
            MinilinkerError::Launch(_) => "E007",
            MinilinkerError::Terminal(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            MinilinkerError::Validation(_) => "Validation Error",
            MinilinkerError::NotFound(_) => "Resource Not Found",
            MinilinkerError::FileOperation(_) => "File Operation Error",
            MinilinkerError::Serialization(_) => "Serialization Error",
            MinilinkerError::Config(_) => "Configuration Error",
            MinilinkerError::Clipboard(_) => "Clipboard Error",
            MinilinkerError::Launch(_) => "Browser Launch Error",
            MinilinkerError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            MinilinkerError::Validation(msg)
            | MinilinkerError::NotFound(msg)
            | MinilinkerError::FileOperation(msg)
            | MinilinkerError::Serialization(msg)
            | MinilinkerError::Config(msg)
            | MinilinkerError::Clipboard(msg)
            | MinilinkerError::Launch(msg)
            | MinilinkerError::Terminal(msg) => msg,
        }
    }

    /// 是否为用户输入导致的错误
    pub fn is_validation(&self) -> bool {
        matches!(self, MinilinkerError::Validation(_))
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 和日志）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for MinilinkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MinilinkerError {}

// 便捷的构造函数
impl MinilinkerError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        MinilinkerError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        MinilinkerError::NotFound(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        MinilinkerError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        MinilinkerError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        MinilinkerError::Config(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        MinilinkerError::Clipboard(msg.into())
    }

    pub fn launch<T: Into<String>>(msg: T) -> Self {
        MinilinkerError::Launch(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        MinilinkerError::Terminal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for MinilinkerError {
    fn from(err: std::io::Error) -> Self {
        MinilinkerError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for MinilinkerError {
    fn from(err: serde_json::Error) -> Self {
        MinilinkerError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for MinilinkerError {
    fn from(err: toml::de::Error) -> Self {
        MinilinkerError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for MinilinkerError {
    fn from(err: toml::ser::Error) -> Self {
        MinilinkerError::Config(err.to_string())
    }
}

impl From<crate::utils::url_validator::UrlValidationError> for MinilinkerError {
    fn from(err: crate::utils::url_validator::UrlValidationError) -> Self {
        MinilinkerError::Validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MinilinkerError>;

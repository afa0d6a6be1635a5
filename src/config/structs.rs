use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::{AsRefStr, Display, EnumString};

/// 应用配置（从 TOML 加载，环境变量覆盖）
///
/// - storage: 本地键值存储位置
/// - links: 短链接生成参数
/// - ui: 终端界面行为
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 存储后端类型
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

/// 本地存储配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// 空字符串表示使用平台数据目录
    #[serde(default)]
    pub data_dir: String,
    #[serde(default = "default_storage_key")]
    pub key: String,
}

/// 短链接生成配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinksConfig {
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    #[serde(default = "default_short_prefix")]
    pub short_prefix: String,
}

/// 终端界面配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_open_on_visit")]
    pub open_on_visit: bool,
    #[serde(default = "default_copied_feedback_ms")]
    pub copied_feedback_ms: u64,
    #[serde(default = "default_error_display_ms")]
    pub error_display_ms: u64,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 为空时：TUI 模式写入数据目录下的日志文件，CLI 模式写入 stderr
    #[serde(default)]
    pub file: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

impl StorageConfig {
    /// Directory that holds one `<key>.json` file per stored key.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if !self.data_dir.is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        dirs::data_dir()
            .map(|dir| dir.join("minilinker"))
            .unwrap_or_else(|| PathBuf::from("data"))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: String::new(),
            key: default_storage_key(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            short_prefix: default_short_prefix(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            open_on_visit: default_open_on_visit(),
            copied_feedback_ms: default_copied_feedback_ms(),
            error_display_ms: default_error_display_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
            format: default_log_format(),
            enable_rotation: false,
            max_backups: default_max_backups(),
        }
    }
}

fn default_storage_key() -> String {
    "shortUrls".to_string()
}

fn default_code_length() -> usize {
    crate::utils::DEFAULT_CODE_LENGTH
}

fn default_short_prefix() -> String {
    "https://".to_string()
}

fn default_open_on_visit() -> bool {
    true
}

fn default_copied_feedback_ms() -> u64 {
    2000
}

fn default_error_display_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

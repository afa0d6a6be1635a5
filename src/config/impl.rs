use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::{AppConfig, StorageBackend};
use crate::errors::Result;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// Load configuration from TOML file with environment variable fallback
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    pub fn load(explicit_path: Option<&Path>) -> Self {
        let mut config = Self::load_from_file(explicit_path);
        config.override_with(|key| env::var(key).ok());
        config
    }

    /// 候选配置文件路径，按顺序查找
    pub fn candidate_paths(explicit_path: Option<&Path>) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(path) = explicit_path {
            paths.push(path.to_path_buf());
        }
        paths.push(PathBuf::from("config.toml"));
        paths.push(PathBuf::from("minilinker.toml"));
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("minilinker").join("config.toml"));
        }
        paths
    }

    fn load_from_file(explicit_path: Option<&Path>) -> Self {
        if let Some(path) = explicit_path
            && !path.exists()
        {
            eprintln!("[WARN] Config file not found: {}", path.display());
        }

        for path in Self::candidate_paths(explicit_path) {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("[WARN] Failed to load config file {}: {}", path.display(), e);
                }
            }
        }

        Self::default()
    }

    /// Parse a single TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str::<AppConfig>(content)?)
    }

    /// Override configuration with values from `lookup`.
    ///
    /// `lookup` maps an environment variable name to its value; invalid
    /// numbers or booleans are reported and ignored.
    pub fn override_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Storage config
        if let Some(backend) = lookup("MINILINKER_STORAGE_BACKEND") {
            match backend.parse::<StorageBackend>() {
                Ok(backend) => self.storage.backend = backend,
                Err(_) => eprintln!("[WARN] Invalid MINILINKER_STORAGE_BACKEND: {}", backend),
            }
        }
        if let Some(data_dir) = lookup("MINILINKER_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }
        if let Some(key) = lookup("MINILINKER_STORAGE_KEY")
            && !key.is_empty()
        {
            self.storage.key = key;
        }

        // Links config
        if let Some(length) = lookup("MINILINKER_CODE_LENGTH") {
            match length.parse() {
                Ok(length) => self.links.code_length = length,
                Err(_) => eprintln!("[WARN] Invalid MINILINKER_CODE_LENGTH: {}", length),
            }
        }
        if let Some(prefix) = lookup("MINILINKER_SHORT_PREFIX") {
            self.links.short_prefix = prefix;
        }

        // UI config
        if let Some(dark_mode) = lookup("MINILINKER_DARK_MODE") {
            match parse_bool(&dark_mode) {
                Some(value) => self.ui.dark_mode = value,
                None => eprintln!("[WARN] Invalid MINILINKER_DARK_MODE: {}", dark_mode),
            }
        }
        if let Some(open) = lookup("MINILINKER_OPEN_ON_VISIT") {
            match parse_bool(&open) {
                Some(value) => self.ui.open_on_visit = value,
                None => eprintln!("[WARN] Invalid MINILINKER_OPEN_ON_VISIT: {}", open),
            }
        }

        // Logging config
        if let Some(level) = lookup("RUST_LOG") {
            self.logging.level = level;
        }
        if let Some(file) = lookup("MINILINKER_LOG_FILE") {
            self.logging.file = file;
        }
    }

    /// Generate a sample TOML configuration file
    pub fn generate_sample_config() -> String {
        let sample_config = AppConfig::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// Save current configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Global configuration instance

/// Get the global configuration instance
pub fn get_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| AppConfig::load(None))
}

/// Initialize the global configuration
pub fn init_config(explicit_path: Option<&Path>) -> &'static AppConfig {
    CONFIG.get_or_init(|| AppConfig::load(explicit_path))
}

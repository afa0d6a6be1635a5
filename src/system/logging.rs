//! Logging system initialization
//!
//! Sets up the tracing subscriber from [`LoggingConfig`]. The terminal UI owns
//! the screen, so in TUI mode log lines never go to stdout/stderr.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{MinilinkerError, Result};

/// 默认日志文件名
const DEFAULT_LOG_FILE: &str = "minilinker.log";

/// Where log output goes when no file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Headless commands: stderr.
    Stderr,
    /// Terminal UI: a file inside the data directory.
    DataDirFile,
}

/// Resolve the log file path, or `None` to log to stderr.
pub fn resolve_log_file(config: &LoggingConfig, data_dir: &Path, target: LogTarget) -> Option<PathBuf> {
    if !config.file.is_empty() {
        return Some(PathBuf::from(&config.file));
    }
    match target {
        LogTarget::Stderr => None,
        LogTarget::DataDirFile => Some(data_dir.join(DEFAULT_LOG_FILE)),
    }
}

/// Initialize logging system based on configuration
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// Calling this twice is harmless: the second subscriber is simply not installed.
pub fn init_logging(config: &LoggingConfig, data_dir: &Path, target: LogTarget) -> Result<WorkerGuard> {
    let log_file = resolve_log_file(config, data_dir, target);

    let writer: Box<dyn std::io::Write + Send + Sync> = match &log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            std::fs::create_dir_all(dir)?;

            if config.enable_rotation {
                let filename = path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .unwrap_or(DEFAULT_LOG_FILE);
                let appender = rolling::Builder::new()
                    .rotation(rolling::Rotation::DAILY)
                    .filename_prefix(filename.trim_end_matches(".log"))
                    .filename_suffix("log")
                    .max_log_files(config.max_backups.max(1) as usize)
                    .build(dir)
                    .map_err(|e| {
                        MinilinkerError::file_operation(format!(
                            "Failed to create rolling log appender: {}",
                            e
                        ))
                    })?;
                Box::new(appender)
            } else {
                let file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)?;
                Box::new(file)
            }
        }
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    // 已经初始化过时 try_init 会失败，忽略即可
    let _ = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_log_file() {
        let data_dir = Path::new("/tmp/minilinker-data");
        let mut config = LoggingConfig::default();

        assert_eq!(resolve_log_file(&config, data_dir, LogTarget::Stderr), None);
        assert_eq!(
            resolve_log_file(&config, data_dir, LogTarget::DataDirFile),
            Some(data_dir.join("minilinker.log"))
        );

        config.file = "custom.log".to_string();
        assert_eq!(
            resolve_log_file(&config, data_dir, LogTarget::Stderr),
            Some(PathBuf::from("custom.log"))
        );
    }
}

//! CLI interface module
//!
//! Headless commands sharing the TUI's storage and link service.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::AppConfig;
use crate::errors::MinilinkerError;
use crate::services::LinkService;
use crate::storage::{LinkRepository, StorageFactory};
use crate::system::{NoopLauncher, SystemLauncher, UrlLauncher};
use commands::{add_link, config_generate, list_links, visit_link};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<MinilinkerError> for CliError {
    fn from(err: MinilinkerError) -> Self {
        match err {
            MinilinkerError::Validation(msg) => CliError::ParseError(msg),
            MinilinkerError::FileOperation(msg) | MinilinkerError::Serialization(msg) => {
                CliError::StorageError(msg)
            }
            other => CliError::CommandError(other.message().to_string()),
        }
    }
}

/// Open the configured store and load the link list
pub async fn load_service(config: &AppConfig) -> Result<LinkService, CliError> {
    let store = StorageFactory::create(&config.storage)
        .await
        .map_err(|e| CliError::StorageError(e.message().to_string()))?;
    let repository = LinkRepository::new(store, config.storage.key.clone());
    Ok(LinkService::load(repository, config.links.clone()).await?)
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &AppConfig) -> Result<(), CliError> {
    // Generate 不需要打开存储
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        return config_generate(output_path, force).await;
    }

    let mut service = load_service(config).await?;

    match cmd {
        Commands::Add { url } => add_link(&mut service, &url).await,

        Commands::List { json } => list_links(&service, json),

        Commands::Visit { index, no_open } => {
            let launcher: Box<dyn UrlLauncher> = if no_open || !config.ui.open_on_visit {
                Box::new(NoopLauncher)
            } else {
                Box::new(SystemLauncher)
            };
            visit_link(&mut service, Commands::visit_position(index), launcher.as_ref()).await
        }

        Commands::Config { .. } => unreachable!("handled above"),

        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in main"),
    }
}

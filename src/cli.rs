//! Command-line interface definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// minilinker - paste a long URL, get a short one
#[derive(Parser, Debug)]
#[command(name = "minilinker")]
#[command(version)]
#[command(about = "A terminal URL shortener demo", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands; no command starts the TUI
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten a URL and store the entry
    Add {
        /// Long URL (http:// or https://)
        url: String,
    },

    /// List stored links, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count a click on a link and open its original URL
    Visit {
        /// Position as printed by `list` (starting at 1)
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        index: u32,

        /// Only count the click, don't launch a browser
        #[arg(long)]
        no_open: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<PathBuf>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// Zero-based list position for `visit`
    pub fn visit_position(index: u32) -> usize {
        index.saturating_sub(1) as usize
    }
}

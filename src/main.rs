use std::process;

use clap::Parser;
use tracing::debug;

use minilinker::cli::{Cli, Commands};
use minilinker::config::init_config;
use minilinker::system::{LogTarget, init_logging};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = init_config(cli.config.as_deref());

    let command = match cli.command {
        #[cfg(feature = "tui")]
        Some(Commands::Tui) | None => None,
        #[cfg(not(feature = "tui"))]
        None => {
            eprintln!("No command given and the TUI is not enabled; see --help");
            process::exit(2);
        }
        Some(cmd) => Some(cmd),
    };

    // TUI 占用终端，日志只能写文件
    let target = if command.is_none() {
        LogTarget::DataDirFile
    } else {
        LogTarget::Stderr
    };
    let _guard = match init_logging(&config.logging, &config.storage.resolved_data_dir(), target) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{}", e.format_colored());
            None
        }
    };
    debug!("Configuration loaded: {:?}", config);

    match command {
        #[cfg(feature = "tui")]
        None => {
            if let Err(e) = color_eyre::install() {
                eprintln!("Failed to install error hooks: {}", e);
            }
            if let Err(e) = minilinker::interfaces::tui::run_tui(config).await {
                eprintln!("{:?}", e);
                process::exit(1);
            }
        }
        #[cfg(not(feature = "tui"))]
        None => unreachable!("handled above"),
        Some(cmd) => run_command(cmd, config).await,
    }
}

#[cfg(feature = "cli")]
async fn run_command(cmd: Commands, config: &minilinker::config::AppConfig) {
    if let Err(e) = minilinker::interfaces::cli::run_cli_command(cmd, config).await {
        eprintln!("{}", e.format_colored());
        process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
async fn run_command(_cmd: Commands, _config: &minilinker::config::AppConfig) {
    eprintln!("CLI commands are not enabled in this build");
    process::exit(2);
}

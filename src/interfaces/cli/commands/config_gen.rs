//! Generate config command

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use crate::config::AppConfig;
use crate::interfaces::cli::CliError;

/// 默认输出路径
const DEFAULT_OUTPUT: &str = "config.example.toml";

/// Generate example configuration file
pub async fn config_generate(output_path: Option<PathBuf>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let shown = path.display().to_string();

    // 检查文件是否存在，非 --force 模式下交互确认
    if !force && path.exists() {
        print!(
            "{} {} {}",
            "File already exists:".yellow(),
            shown.blue(),
            "Overwrite? [y/N] ".yellow()
        );
        io::stdout()
            .flush()
            .map_err(|e| CliError::CommandError(e.to_string()))?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| CliError::CommandError(e.to_string()))?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        shown.blue()
    );

    match AppConfig::default().save_to_file(&path) {
        Ok(()) => {
            println!(
                "  {} {}",
                "Configuration file generated successfully".green(),
                shown.blue()
            );
            println!(
                "  {} {}",
                "Pass it with --config or save it as config.toml".yellow(),
                "🔧".blue()
            );
            Ok(())
        }
        Err(e) => {
            println!(
                "  {} {}",
                "Failed to generate configuration file".red(),
                e.to_string().red()
            );
            Err(CliError::CommandError(format!(
                "Unable to write configuration file: {}",
                e
            )))
        }
    }
}

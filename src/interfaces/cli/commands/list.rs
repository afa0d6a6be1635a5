//! List links command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkService;
use crate::storage::LinkEntry;

/// One line of `list` output; `position` starts at 1
pub fn format_link_line(position: usize, link: &LinkEntry) -> String {
    format!(
        "{:>3}. {} -> {} {}",
        position,
        link.short.cyan(),
        link.original.blue().underline(),
        format!("(clicks: {})", link.clicks).dimmed().cyan()
    )
}

pub fn list_links(service: &LinkService, json: bool) -> Result<(), CliError> {
    if json {
        let output = serde_json::to_string_pretty(service.links())
            .map_err(|e| CliError::CommandError(format!("Failed to serialize links: {}", e)))?;
        println!("{}", output);
        return Ok(());
    }

    if service.is_empty() {
        println!("{} No short links found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Short link list:".bold().green());
    println!();
    for (index, link) in service.links().iter().enumerate() {
        println!("  {}", format_link_line(index + 1, link));
    }
    println!();
    println!(
        "{} Total {} short links, {} clicks",
        "ℹ".bold().blue(),
        service.len().to_string().green(),
        service.total_clicks().to_string().green()
    );
    Ok(())
}

//! Add link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkService;

pub async fn add_link(service: &mut LinkService, url: &str) -> Result<(), CliError> {
    let entry = service.shorten(url).await?;

    println!(
        "{} Added short link: {} -> {}",
        "✓".bold().green(),
        entry.short.cyan(),
        entry.original.blue().underline()
    );

    Ok(())
}

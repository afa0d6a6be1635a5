//! Visit link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkService;
use crate::system::UrlLauncher;

/// Count a click on the entry at `position` (zero-based) and open it.
///
/// The click is stored before the launch, so a failed launch still counts.
pub async fn visit_link(
    service: &mut LinkService,
    position: usize,
    launcher: &dyn UrlLauncher,
) -> Result<(), CliError> {
    let entry = service.visit(position).await?;

    println!(
        "{} {} -> {} (clicks: {})",
        "✓".bold().green(),
        entry.short.cyan(),
        entry.original.blue().underline(),
        entry.clicks.to_string().green()
    );

    launcher.open(&entry.original)?;
    Ok(())
}

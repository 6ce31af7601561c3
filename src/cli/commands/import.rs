//! Import command.

use std::path::Path;

use console::style;

use crate::config::Settings;
use crate::services::import_file;

/// Import a JSON file of hikes, replacing any hikes with the same number.
pub async fn cmd_import(settings: &Settings, file: &Path) -> anyhow::Result<()> {
    settings.ensure_directories()?;

    let ctx = settings.create_db_context();
    ctx.init_schema().await?;

    println!(
        "{} Importing hikes from {}",
        style("→").cyan(),
        file.display()
    );

    let summary = match import_file(&ctx.hikes(), file).await {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("  {} Import failed: {}", style("✗").red(), e);
            return Err(e.into());
        }
    };

    println!(
        "  {} {} hikes, {} peaks, {} trailheads, {} climbing seasons",
        style("✓").green(),
        summary.hikes,
        summary.peaks,
        summary.trailheads,
        summary.seasons
    );
    println!(
        "{} Database: {}",
        style("✓").green(),
        settings.database_url()
    );

    Ok(())
}

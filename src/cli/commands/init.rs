//! Initialize command.

use console::style;

use crate::config::Settings;

/// Initialize the data directory and database.
pub async fn cmd_init(settings: &Settings) -> anyhow::Result<()> {
    settings.ensure_directories()?;

    let ctx = settings.create_db_context();
    ctx.init_schema().await?;

    let tables = ctx.list_tables().await?;
    tracing::debug!("Schema objects: {}", tables.join(", "));

    println!(
        "{} Initialized summit hikes database at {}",
        style("✓").green(),
        settings.database_path().display()
    );

    Ok(())
}

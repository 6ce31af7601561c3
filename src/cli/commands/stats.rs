//! Stats command.

use console::style;

use crate::config::Settings;

/// Print dataset statistics straight from the database.
pub async fn cmd_stats(settings: &Settings, json: bool) -> anyhow::Result<()> {
    if !settings.database_exists() {
        eprintln!(
            "{} No database at {}. Run 'summit import <FILE>' first.",
            style("✗").red(),
            settings.database_url()
        );
        return Ok(());
    }

    let ctx = settings.create_db_context();
    let stats = ctx.hikes().stats().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let fmt = |value: Option<f64>, unit: &str| match value {
        Some(v) => format!("{:.1}{}", v, unit),
        None => "-".to_string(),
    };

    println!("{}", style("Summit Hikes").bold());
    println!("  Hikes:            {}", stats.total_hikes);
    println!("  Fourteeners:      {}", stats.fourteeners);
    println!("  Avg distance:     {}", fmt(stats.avg_distance, " mi"));
    println!("  Avg gain:         {}", fmt(stats.avg_elevation_gain, "'"));
    println!("  Avg difficulty:   {}", fmt(stats.avg_difficulty, "/10"));
    println!(
        "  Distance range:   {} to {}",
        fmt(stats.shortest_distance, " mi"),
        fmt(stats.longest_distance, " mi")
    );
    println!(
        "  Peak range:       {} to {}",
        stats.lowest_peak.map_or("-".to_string(), |e| format!("{}'", e)),
        stats.highest_peak.map_or("-".to_string(), |e| format!("{}'", e))
    );

    if !stats.difficulty_distribution.is_empty() {
        println!("\n{}", style("By difficulty").bold());
        for bucket in &stats.difficulty_distribution {
            println!("  {:<10} {}", bucket.difficulty_label, bucket.count);
        }
    }
    if !stats.class_distribution.is_empty() {
        println!("\n{}", style("By class").bold());
        for bucket in &stats.class_distribution {
            println!("  {:<10} {}", bucket.class_text, bucket.count);
        }
    }

    Ok(())
}

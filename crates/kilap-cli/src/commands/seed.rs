//! Seed command.

use anyhow::Result;
use colored::Colorize;
use kilap_db::DocumentStore;

pub async fn execute(store: &dyn DocumentStore) -> Result<()> {
    let report = kilap_core::seed::seed_all(store).await?;
    println!(
        "{} Imported {} services and {} testimonials",
        "✓".green().bold(),
        report.services,
        report.testimonials
    );
    Ok(())
}

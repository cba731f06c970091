//! The `schoolbook leaderboard` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use schoolbook_core::analytics::leaderboard_ranking;
use schoolbook_seed::BundledSeed;

pub async fn execute(config_path: Option<PathBuf>, top: usize) -> Result<()> {
    // Leaderboard data lives outside the entity store; no hydration needed.
    let _ = super::config(config_path)?;
    anyhow::ensure!(top >= 1, "--top must be at least 1");

    let performers = BundledSeed::performers()?;
    let ranked = leaderboard_ranking(&performers, top);

    let mut table = Table::new();
    table.set_header(vec!["#", "Name", "Class", "Points", "Accuracy", "Streak"]);
    for row in &ranked {
        table.add_row(vec![
            row.rank.to_string(),
            row.performer.name.clone(),
            row.performer.class_name.clone(),
            row.performer.points.to_string(),
            format!("{}%", row.performer.accuracy),
            format!("{} days", row.performer.streak),
        ]);
    }
    println!("{table}");

    if let Some(champion) = ranked.first() {
        println!(
            "Champion: {} ({} pts)",
            champion.performer.name, champion.performer.points
        );
    }
    Ok(())
}

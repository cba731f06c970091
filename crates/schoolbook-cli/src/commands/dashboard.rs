//! The `schoolbook dashboard` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use schoolbook_core::analytics::{
    dashboard_summary, leaderboard_ranking, per_class_enrollment, performance_distribution,
};
use schoolbook_seed::BundledSeed;

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = super::config(config_path)?;
    let store = super::open_store(&config).await?;

    let summary = dashboard_summary(store.students(), store.classes());
    println!("{}", config.school_name);
    println!(
        "Students: {}  Classes: {}  Avg. performance: {:.1}%\n",
        summary.total_students, summary.total_classes, summary.avg_performance
    );

    let mut enrollment = Table::new();
    enrollment.set_header(vec!["Class", "Students"]);
    for row in per_class_enrollment(store.classes(), store.students()) {
        enrollment.add_row(vec![row.class_name, row.count.to_string()]);
    }
    println!("Class-wise enrollment\n{enrollment}\n");

    let mut distribution = Table::new();
    distribution.set_header(vec!["Bucket", "Students", "Share"]);
    for bucket in performance_distribution(store.students()) {
        distribution.add_row(vec![
            bucket.label.to_string(),
            bucket.count.to_string(),
            format!("{}%", bucket.percent),
        ]);
    }
    println!("Performance distribution\n{distribution}\n");

    let performers = BundledSeed::performers()?;
    let mut leaderboard = Table::new();
    leaderboard.set_header(vec!["#", "Name", "Class", "Points", "Accuracy", "Streak"]);
    for row in leaderboard_ranking(&performers, config.leaderboard_top_n) {
        leaderboard.add_row(vec![
            row.rank.to_string(),
            row.performer.name,
            row.performer.class_name,
            row.performer.points.to_string(),
            format!("{}%", row.performer.accuracy),
            row.performer.streak.to_string(),
        ]);
    }
    println!("Leaderboard - top {}\n{leaderboard}", config.leaderboard_top_n);

    Ok(())
}

//! The `schoolbook report` subcommands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;

use schoolbook_report::{by_day_csv, by_student_csv, AttendanceReport};

pub async fn export(
    config_path: Option<PathBuf>,
    out: PathBuf,
    view: String,
    json: bool,
) -> Result<()> {
    let config = super::config(config_path)?;
    let store = super::open_store(&config).await?;

    let report = AttendanceReport::generate(store.students(), store.attendance());
    let csv = match view.as_str() {
        "by-student" => by_student_csv(&report.by_student),
        "by-day" => by_day_csv(&report.by_day),
        other => anyhow::bail!("unknown view: {other} (expected by-student or by-day)"),
    };

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&out, &csv)
        .with_context(|| format!("failed to write CSV to {}", out.display()))?;
    println!("Wrote {} ({} view)", out.display(), view);

    if json {
        let json_path = out.with_extension("json");
        report.save_json(&json_path)?;
        println!("Wrote {}", json_path.display());
    }
    Ok(())
}

pub async fn show(config_path: Option<PathBuf>) -> Result<()> {
    let config = super::config(config_path)?;
    let store = super::open_store(&config).await?;

    let report = AttendanceReport::generate(store.students(), store.attendance());

    let mut by_student = Table::new();
    by_student.set_header(vec!["ID", "Name", "Rate"]);
    for row in &report.by_student {
        by_student.add_row(vec![
            row.id.clone(),
            row.name.clone(),
            format!("{}%", row.rate),
        ]);
    }
    println!("Attendance rate by student\n{by_student}\n");

    let mut by_day = Table::new();
    by_day.set_header(vec!["Date", "Rate"]);
    for row in &report.by_day {
        by_day.add_row(vec![row.date.clone(), format!("{}%", row.rate)]);
    }
    println!("Attendance rate by day\n{by_day}");
    Ok(())
}

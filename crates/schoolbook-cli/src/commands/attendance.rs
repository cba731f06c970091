//! The `schoolbook attendance` subcommands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::Table;

use schoolbook_core::analytics::filter_attendance;

pub async fn list(
    config_path: Option<PathBuf>,
    class_id: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let config = super::config(config_path)?;

    if let Some(date) = &date {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("invalid date {date}, expected YYYY-MM-DD"))?;
    }

    let store = super::open_store(&config).await?;
    let records = filter_attendance(store.attendance(), class_id.as_deref(), date.as_deref());

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Class", "Student", "Present"]);
    for record in &records {
        // Soft references: a dangling id renders as "?" instead of failing.
        let class_name = store
            .classes()
            .iter()
            .find(|c| c.id == record.class_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "?".into());
        let student_name = store
            .students()
            .iter()
            .find(|s| s.id == record.student_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "?".into());

        table.add_row(vec![
            record.id.clone(),
            record.date.clone(),
            class_name,
            student_name,
            if record.present { "present" } else { "absent" }.to_string(),
        ]);
    }
    println!("{table}");
    println!("{} records", records.len());
    Ok(())
}

pub async fn toggle(config_path: Option<PathBuf>, record_id: String) -> Result<()> {
    let config = super::config(config_path)?;
    let mut store = super::open_store(&config).await?;

    store.toggle_attendance(&record_id);

    match store.attendance().iter().find(|a| a.id == record_id) {
        Some(record) => println!(
            "Record {record_id} is now {}",
            if record.present { "present" } else { "absent" }
        ),
        None => println!("No attendance record with id {record_id}; nothing changed"),
    }
    Ok(())
}

//! The `schoolbook students` subcommands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;

use schoolbook_core::analytics::filter_students;
use schoolbook_core::model::{StudentDraft, StudentPatch, StudentStatus};

pub async fn list(
    config_path: Option<PathBuf>,
    search: Option<String>,
    class_id: Option<String>,
) -> Result<()> {
    let config = super::config(config_path)?;
    let store = super::open_store(&config).await?;

    let query = search.unwrap_or_default();
    let matches = filter_students(store.students(), &query, class_id.as_deref());

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Grade", "Email", "Attendance", "Status", "Class"]);
    for s in &matches {
        table.add_row(vec![
            s.id.clone(),
            s.name.clone(),
            s.grade.clone(),
            s.email.clone(),
            format!("{}%", (s.attendance_rate * 100.0).round() as u32),
            s.status.to_string(),
            s.class_id.clone().unwrap_or_else(|| "-".into()),
        ]);
    }
    println!("{table}");
    println!("{} students", matches.len());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn add(
    config_path: Option<PathBuf>,
    name: String,
    grade: String,
    email: String,
    phone: Option<String>,
    rate: f64,
    status: String,
    class_id: Option<String>,
) -> Result<()> {
    let config = super::config(config_path)?;

    let draft = StudentDraft {
        name,
        grade,
        email,
        phone,
        attendance_rate: rate,
        status: status.parse::<StudentStatus>().map_err(anyhow::Error::msg)?,
        class_id,
    };
    // Validate here, at the boundary; the store trusts its input.
    draft.validate().context("invalid student")?;

    let mut store = super::open_store(&config).await?;
    let id = store.add_student(draft);
    println!("Added student {id}");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn update(
    config_path: Option<PathBuf>,
    id: String,
    name: Option<String>,
    grade: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    rate: Option<f64>,
    status: Option<String>,
    class_id: Option<String>,
) -> Result<()> {
    let config = super::config(config_path)?;

    let status = status
        .map(|s| s.parse::<StudentStatus>().map_err(anyhow::Error::msg))
        .transpose()?;
    if let Some(rate) = rate {
        anyhow::ensure!((0.0..=1.0).contains(&rate), "rate {rate} is outside [0, 1]");
    }

    let patch = StudentPatch {
        name,
        grade,
        email,
        phone,
        attendance_rate: rate,
        status,
        class_id,
    };
    anyhow::ensure!(!patch.is_empty(), "no fields to update");

    let mut store = super::open_store(&config).await?;
    let known = store.students().iter().any(|s| s.id == id);
    store.update_student(&id, &patch);

    if known {
        println!("Updated student {id}");
    } else {
        println!("No student with id {id}; nothing changed");
    }
    Ok(())
}

pub async fn delete(config_path: Option<PathBuf>, id: String) -> Result<()> {
    let config = super::config(config_path)?;
    let mut store = super::open_store(&config).await?;

    let known = store.students().iter().any(|s| s.id == id);
    store.delete_student(&id);

    if known {
        println!("Deleted student {id} (attendance history kept)");
    } else {
        println!("No student with id {id}; nothing changed");
    }
    Ok(())
}

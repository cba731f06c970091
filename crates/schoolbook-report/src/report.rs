//! Attendance report assembly with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use schoolbook_core::analytics::{
    attendance_rate_by_day, attendance_rate_by_student, DailyAttendanceRate, StudentAttendanceRate,
};
use schoolbook_core::model::{AttendanceRecord, Student};

/// A point-in-time attendance report derived from a store snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Students covered.
    pub student_count: usize,
    /// Attendance records covered.
    pub record_count: usize,
    /// Per-student rates, in roster order.
    pub by_student: Vec<StudentAttendanceRate>,
    /// Per-day rates, chronological.
    pub by_day: Vec<DailyAttendanceRate>,
}

impl AttendanceReport {
    /// Derive a report from the given collections.
    pub fn generate(students: &[Student], records: &[AttendanceRecord]) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            student_count: students.len(),
            record_count: records.len(),
            by_student: attendance_rate_by_student(students, records),
            by_day: attendance_rate_by_day(records),
        }
    }

    /// Save the report as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a previously saved report.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AttendanceReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

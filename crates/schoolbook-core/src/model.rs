//! Core data model types for schoolbook.
//!
//! Field names serialize in camelCase so the persisted snapshot and the
//! bundled seed datasets keep the shape the original dashboard wrote.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DraftError;

/// A student enrolled at the school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique identifier, shaped like `S1042`.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Grade label (e.g. "7").
    pub grade: String,
    /// Contact email.
    pub email: String,
    /// Optional contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Cached attendance rate in `[0, 1]`, refreshed from the attendance
    /// log whenever an attendance record is toggled.
    pub attendance_rate: f64,
    /// Enrollment status.
    pub status: StudentStatus,
    /// Soft reference to a class; may be absent or dangling.
    #[serde(default)]
    pub class_id: Option<String>,
}

/// Enrollment status of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    Active,
    Inactive,
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentStatus::Active => write!(f, "active"),
            StudentStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(StudentStatus::Active),
            "inactive" => Ok(StudentStatus::Inactive),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// A class offered by the school. Seeded once; no mutation operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    /// Unique identifier.
    pub id: String,
    /// Class name (e.g. "Grade 7A").
    pub name: String,
    /// Grade label.
    pub grade: String,
    /// Lead teacher.
    pub teacher: String,
    /// Free-form schedule description.
    pub schedule: String,
}

/// One attendance entry: a student on a date, present or not.
///
/// `student_id` and `class_id` are soft references: deleting a student
/// never touches these records, so lookups may resolve to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Unique identifier.
    pub id: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Soft reference to a class.
    pub class_id: String,
    /// Soft reference to a student.
    pub student_id: String,
    /// Whether the student was present.
    pub present: bool,
}

/// A leaderboard row: points, accuracy, and streak for one student.
///
/// These live outside the entity store, matching the original's static
/// leaderboard dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performer {
    /// Display name.
    pub name: String,
    /// Class label (display only, not a reference).
    #[serde(rename = "class")]
    pub class_name: String,
    /// Total points earned.
    pub points: u32,
    /// Accuracy percentage.
    pub accuracy: u32,
    /// Consecutive-day streak.
    pub streak: u32,
}

/// Validated input for creating a student. The store assigns the id.
///
/// Replaces the original's duck-typed form payload: every field is typed
/// and [`StudentDraft::validate`] runs at the boundary before anything
/// reaches the entity store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    pub grade: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_attendance_rate")]
    pub attendance_rate: f64,
    #[serde(default = "default_status")]
    pub status: StudentStatus,
    #[serde(default)]
    pub class_id: Option<String>,
}

fn default_attendance_rate() -> f64 {
    0.9
}

fn default_status() -> StudentStatus {
    StudentStatus::Active
}

impl StudentDraft {
    /// Check the draft for boundary-level problems.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::EmptyName);
        }
        if !self.email.contains('@') {
            return Err(DraftError::InvalidEmail(self.email.clone()));
        }
        if !(0.0..=1.0).contains(&self.attendance_rate) {
            return Err(DraftError::RateOutOfRange(self.attendance_rate));
        }
        Ok(())
    }

    /// Materialize the draft into a [`Student`] with the given id.
    pub fn into_student(self, id: String) -> Student {
        Student {
            id,
            name: self.name,
            grade: self.grade,
            email: self.email,
            phone: self.phone,
            attendance_rate: self.attendance_rate,
            status: self.status,
            class_id: self.class_id,
        }
    }
}

/// Partial update for a student. `Some` fields overwrite, `None` fields
/// are preserved. A shallow, last-write-wins-per-field merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub attendance_rate: Option<f64>,
    #[serde(default)]
    pub status: Option<StudentStatus>,
    #[serde(default)]
    pub class_id: Option<String>,
}

impl StudentPatch {
    /// Merge this patch into an existing student.
    pub fn apply(&self, student: &mut Student) {
        if let Some(name) = &self.name {
            student.name = name.clone();
        }
        if let Some(grade) = &self.grade {
            student.grade = grade.clone();
        }
        if let Some(email) = &self.email {
            student.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            student.phone = Some(phone.clone());
        }
        if let Some(rate) = self.attendance_rate {
            student.attendance_rate = rate;
        }
        if let Some(status) = self.status {
            student.status = status;
        }
        if let Some(class_id) = &self.class_id {
            student.class_id = Some(class_id.clone());
        }
    }

    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == StudentPatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> StudentDraft {
        StudentDraft {
            name: "Asha Rao".into(),
            grade: "7".into(),
            email: "asha@school.test".into(),
            phone: None,
            attendance_rate: 0.92,
            status: StudentStatus::Active,
            class_id: Some("C1".into()),
        }
    }

    #[test]
    fn status_display_and_parse() {
        assert_eq!(StudentStatus::Active.to_string(), "active");
        assert_eq!("Inactive".parse::<StudentStatus>().unwrap(), StudentStatus::Inactive);
        assert!("expelled".parse::<StudentStatus>().is_err());
    }

    #[test]
    fn draft_validates() {
        assert!(draft().validate().is_ok());

        let mut d = draft();
        d.name = "   ".into();
        assert!(matches!(d.validate(), Err(DraftError::EmptyName)));

        let mut d = draft();
        d.email = "not-an-email".into();
        assert!(matches!(d.validate(), Err(DraftError::InvalidEmail(_))));

        let mut d = draft();
        d.attendance_rate = 1.2;
        assert!(matches!(d.validate(), Err(DraftError::RateOutOfRange(_))));
    }

    #[test]
    fn patch_merges_only_set_fields() {
        let mut student = draft().into_student("S1001".into());
        let before = student.clone();

        let patch = StudentPatch {
            grade: Some("8".into()),
            ..Default::default()
        };
        patch.apply(&mut student);

        assert_eq!(student.grade, "8");
        assert_eq!(student.name, before.name);
        assert_eq!(student.email, before.email);
        assert_eq!(student.phone, before.phone);
        assert_eq!(student.attendance_rate, before.attendance_rate);
        assert_eq!(student.status, before.status);
        assert_eq!(student.class_id, before.class_id);
    }

    #[test]
    fn student_serde_uses_camel_case() {
        let student = draft().into_student("S1001".into());
        let json = serde_json::to_string(&student).unwrap();
        assert!(json.contains("\"attendanceRate\""));
        assert!(json.contains("\"classId\""));

        let back: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(back, student);
    }

    #[test]
    fn attendance_record_deserializes_seed_shape() {
        let json = r#"{"id":"A1","date":"2024-01-05","classId":"C1","studentId":"S1001","present":true}"#;
        let rec: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.student_id, "S1001");
        assert!(rec.present);
    }
}

//! The bundled seed dataset.
//!
//! The three collections plus the leaderboard rows ship embedded in the
//! binary. Each fetch sleeps for a configurable delay to mimic the
//! original's simulated API latency, then deserializes a fresh copy.

use std::time::Duration;

use async_trait::async_trait;

use schoolbook_core::error::SeedError;
use schoolbook_core::model::{AttendanceRecord, Class, Performer, Student};
use schoolbook_core::traits::SeedSource;

const STUDENTS_JSON: &str = include_str!("../data/students.json");
const CLASSES_JSON: &str = include_str!("../data/classes.json");
const ATTENDANCE_JSON: &str = include_str!("../data/attendance.json");
const LEADERBOARD_JSON: &str = include_str!("../data/leaderboard.json");

/// Default simulated latency per fetch, matching the original source.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);

/// Seed source backed by the embedded datasets.
pub struct BundledSeed {
    delay: Duration,
}

impl BundledSeed {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Override the simulated latency (use `Duration::ZERO` in tests).
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// The bundled leaderboard rows. These live outside the entity
    /// store, so they are exposed directly rather than via the trait.
    pub fn performers() -> Result<Vec<Performer>, SeedError> {
        parse("leaderboard", LEADERBOARD_JSON)
    }
}

impl Default for BundledSeed {
    fn default() -> Self {
        Self::new()
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    collection: &'static str,
    raw: &str,
) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(raw).map_err(|e| SeedError::Malformed {
        collection,
        message: e.to_string(),
    })
}

#[async_trait]
impl SeedSource for BundledSeed {
    async fn fetch_students(&self) -> Result<Vec<Student>, SeedError> {
        tokio::time::sleep(self.delay).await;
        parse("students", STUDENTS_JSON)
    }

    async fn fetch_classes(&self) -> Result<Vec<Class>, SeedError> {
        tokio::time::sleep(self.delay).await;
        parse("classes", CLASSES_JSON)
    }

    async fn fetch_attendance(&self) -> Result<Vec<AttendanceRecord>, SeedError> {
        tokio::time::sleep(self.delay).await;
        parse("attendance", ATTENDANCE_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolbook_core::model::StudentStatus;
    use std::collections::HashSet;

    fn seed() -> BundledSeed {
        BundledSeed::with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn bundled_collections_parse() {
        let students = seed().fetch_students().await.unwrap();
        let classes = seed().fetch_classes().await.unwrap();
        let attendance = seed().fetch_attendance().await.unwrap();

        assert!(!students.is_empty());
        assert!(!classes.is_empty());
        assert!(!attendance.is_empty());
    }

    #[tokio::test]
    async fn bundled_ids_are_unique_per_collection() {
        let students = seed().fetch_students().await.unwrap();
        let ids: HashSet<_> = students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), students.len());

        let attendance = seed().fetch_attendance().await.unwrap();
        let ids: HashSet<_> = attendance.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), attendance.len());
    }

    #[tokio::test]
    async fn bundled_references_resolve() {
        let students = seed().fetch_students().await.unwrap();
        let classes = seed().fetch_classes().await.unwrap();
        let attendance = seed().fetch_attendance().await.unwrap();

        let class_ids: HashSet<_> = classes.iter().map(|c| c.id.as_str()).collect();
        let student_ids: HashSet<_> = students.iter().map(|s| s.id.as_str()).collect();

        for student in &students {
            if let Some(class_id) = &student.class_id {
                assert!(class_ids.contains(class_id.as_str()), "dangling {class_id}");
            }
            assert!((0.0..=1.0).contains(&student.attendance_rate));
        }
        for record in &attendance {
            assert!(student_ids.contains(record.student_id.as_str()));
            assert!(class_ids.contains(record.class_id.as_str()));
        }
    }

    #[tokio::test]
    async fn bundled_statuses_parse_as_enum() {
        let students = seed().fetch_students().await.unwrap();
        assert!(students
            .iter()
            .any(|s| s.status == StudentStatus::Inactive));
    }

    #[test]
    fn leaderboard_rows_parse() {
        let performers = BundledSeed::performers().unwrap();
        assert!(performers.len() >= 10);
        assert!(performers.iter().all(|p| p.accuracy <= 100));
    }
}

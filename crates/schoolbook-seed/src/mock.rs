//! Mock seed source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use schoolbook_core::error::SeedError;
use schoolbook_core::model::{AttendanceRecord, Class, Student};
use schoolbook_core::traits::SeedSource;

/// A scriptable seed source: fixed collections, per-collection call
/// counters, and per-collection failure injection.
#[derive(Default)]
pub struct MockSeed {
    students: Vec<Student>,
    classes: Vec<Class>,
    attendance: Vec<AttendanceRecord>,
    fail_students: bool,
    fail_classes: bool,
    fail_attendance: bool,
    student_fetches: AtomicU32,
    class_fetches: AtomicU32,
    attendance_fetches: AtomicU32,
}

impl MockSeed {
    /// Mock returning the given collections on every fetch.
    pub fn new(
        students: Vec<Student>,
        classes: Vec<Class>,
        attendance: Vec<AttendanceRecord>,
    ) -> Self {
        Self {
            students,
            classes,
            attendance,
            ..Default::default()
        }
    }

    /// Make one collection's fetch fail. `collection` is one of
    /// `"students"`, `"classes"`, `"attendance"`.
    pub fn failing(mut self, collection: &str) -> Self {
        match collection {
            "students" => self.fail_students = true,
            "classes" => self.fail_classes = true,
            "attendance" => self.fail_attendance = true,
            other => panic!("unknown collection: {other}"),
        }
        self
    }

    /// Total fetch calls per collection: (students, classes, attendance).
    pub fn fetch_counts(&self) -> (u32, u32, u32) {
        (
            self.student_fetches.load(Ordering::Relaxed),
            self.class_fetches.load(Ordering::Relaxed),
            self.attendance_fetches.load(Ordering::Relaxed),
        )
    }
}

#[async_trait]
impl SeedSource for MockSeed {
    async fn fetch_students(&self) -> Result<Vec<Student>, SeedError> {
        self.student_fetches.fetch_add(1, Ordering::Relaxed);
        if self.fail_students {
            return Err(SeedError::Unavailable("students fetch failed".into()));
        }
        Ok(self.students.clone())
    }

    async fn fetch_classes(&self) -> Result<Vec<Class>, SeedError> {
        self.class_fetches.fetch_add(1, Ordering::Relaxed);
        if self.fail_classes {
            return Err(SeedError::Unavailable("classes fetch failed".into()));
        }
        Ok(self.classes.clone())
    }

    async fn fetch_attendance(&self) -> Result<Vec<AttendanceRecord>, SeedError> {
        self.attendance_fetches.fetch_add(1, Ordering::Relaxed);
        if self.fail_attendance {
            return Err(SeedError::Unavailable("attendance fetch failed".into()));
        }
        Ok(self.attendance.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_fetches() {
        let mock = MockSeed::default();
        mock.fetch_students().await.unwrap();
        mock.fetch_students().await.unwrap();
        mock.fetch_classes().await.unwrap();

        assert_eq!(mock.fetch_counts(), (2, 1, 0));
    }

    #[tokio::test]
    async fn injected_failure() {
        let mock = MockSeed::default().failing("attendance");
        assert!(mock.fetch_classes().await.is_ok());
        assert!(mock.fetch_attendance().await.is_err());
    }
}

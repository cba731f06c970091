//! The entity store, single owner of the three mutable collections.
//!
//! All mutation flows through here. Every successful mutation writes the
//! full snapshot through to the durable slot; write-through failures are
//! logged and swallowed, never rolled back or surfaced. Hydration from
//! the seed source happens at most once per store lifetime.

use std::sync::Arc;
use std::time::Duration;

use crate::error::LoadError;
use crate::model::{AttendanceRecord, Class, Student, StudentDraft, StudentPatch};
use crate::snapshot::{StoreSnapshot, STORE_KEY};
use crate::traits::{KeyValueStore, SeedSource};

/// Lowest sequence number ever issued, so fresh stores still produce
/// four-digit ids in the original's `S1000`..`S9999` range.
const ID_FLOOR: u32 = 1000;

/// The canonical, mutable school dataset.
///
/// Explicitly constructed and dependency-injected; there is no global
/// instance. Consumers read through the borrow accessors and mutate only
/// through the operations below.
pub struct EntityStore {
    students: Vec<Student>,
    classes: Vec<Class>,
    attendance: Vec<AttendanceRecord>,
    loaded: bool,
    next_seq: u32,
    seed: Arc<dyn SeedSource>,
    storage: Box<dyn KeyValueStore>,
}

impl EntityStore {
    /// Open a store over the given seed source and durable slot.
    ///
    /// If a snapshot is already persisted and decodes cleanly it is
    /// restored, including the `loaded` flag; a missing, corrupt, or
    /// wrong-version record logs a warning and yields an empty,
    /// not-yet-loaded store.
    pub fn open(seed: Arc<dyn SeedSource>, storage: Box<dyn KeyValueStore>) -> Self {
        let snapshot = match storage.get(STORE_KEY) {
            Ok(Some(bytes)) => match StoreSnapshot::decode(&bytes) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    tracing::warn!("discarding unreadable persisted snapshot: {e}");
                    StoreSnapshot::default()
                }
            },
            Ok(None) => StoreSnapshot::default(),
            Err(e) => {
                tracing::warn!("could not read persisted snapshot: {e}");
                StoreSnapshot::default()
            }
        };

        let next_seq = next_sequence(&snapshot.students);
        Self {
            students: snapshot.students,
            classes: snapshot.classes,
            attendance: snapshot.attendance,
            loaded: snapshot.loaded,
            next_seq,
            seed,
            storage,
        }
    }

    /// One-time hydration from the seed source. Idempotent: returns
    /// immediately once `loaded` is set.
    ///
    /// The three collections are fetched concurrently and replaced
    /// atomically: if any fetch fails the error propagates and the
    /// in-memory state is untouched.
    pub async fn load(&mut self) -> Result<(), LoadError> {
        if self.loaded {
            return Ok(());
        }

        let (students, classes, attendance) = futures::try_join!(
            self.seed.fetch_students(),
            self.seed.fetch_classes(),
            self.seed.fetch_attendance(),
        )?;

        self.students = students;
        self.classes = classes;
        self.attendance = attendance;
        self.loaded = true;
        self.next_seq = next_sequence(&self.students);
        self.persist();
        Ok(())
    }

    /// [`EntityStore::load`] bounded by a deadline. A fetch that hangs
    /// past `timeout` fails the whole call without hydrating anything.
    pub async fn load_with_timeout(&mut self, timeout: Duration) -> Result<(), LoadError> {
        match tokio::time::timeout(timeout, self.load()).await {
            Ok(result) => result,
            Err(_) => Err(LoadError::Timeout(timeout)),
        }
    }

    /// Add a student, assigning the next id from the monotonic counter.
    /// Returns the assigned id.
    pub fn add_student(&mut self, draft: StudentDraft) -> String {
        let id = format!("S{}", self.next_seq);
        self.next_seq += 1;
        self.students.push(draft.into_student(id.clone()));
        self.persist();
        id
    }

    /// Merge a patch into the student with `id`. Unknown ids are a
    /// silent no-op.
    pub fn update_student(&mut self, id: &str, patch: &StudentPatch) {
        let Some(student) = self.students.iter_mut().find(|s| s.id == id) else {
            return;
        };
        patch.apply(student);
        self.persist();
    }

    /// Remove the student with `id`, if present. Attendance records
    /// referencing the id are deliberately left alone (soft references).
    pub fn delete_student(&mut self, id: &str) {
        let before = self.students.len();
        self.students.retain(|s| s.id != id);
        if self.students.len() != before {
            self.persist();
        }
    }

    /// Flip `present` on the attendance record with `record_id`, then
    /// refresh the affected student's cached attendance rate from the
    /// log. Unknown ids are a silent no-op.
    pub fn toggle_attendance(&mut self, record_id: &str) {
        let Some(record) = self.attendance.iter_mut().find(|a| a.id == record_id) else {
            return;
        };
        record.present = !record.present;
        let student_id = record.student_id.clone();

        // The log is canonical; the stored field is a cache.
        let present = self
            .attendance
            .iter()
            .filter(|a| a.student_id == student_id && a.present)
            .count();
        let total = self
            .attendance
            .iter()
            .filter(|a| a.student_id == student_id)
            .count();
        if let Some(student) = self.students.iter_mut().find(|s| s.id == student_id) {
            student.attendance_rate = present as f64 / total as f64;
        }

        self.persist();
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// A full copy of the current state, in the persisted shape.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            students: self.students.clone(),
            classes: self.classes.clone(),
            attendance: self.attendance.clone(),
            loaded: self.loaded,
            ..Default::default()
        }
    }

    /// Write-through. Fire-and-forget: a persistence failure must not
    /// roll back the in-memory mutation or fail the caller.
    fn persist(&self) {
        let snapshot = self.snapshot();
        let result = snapshot
            .encode()
            .and_then(|bytes| self.storage.set(STORE_KEY, &bytes));
        if let Err(e) = result {
            tracing::warn!("snapshot write-through failed: {e}");
        }
    }
}

/// Next id sequence number: one past the highest numeric suffix among
/// existing `S<number>` ids, never below [`ID_FLOOR`].
fn next_sequence(students: &[Student]) -> u32 {
    students
        .iter()
        .filter_map(|s| s.id.strip_prefix('S'))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .map(|n| n + 1)
        .max()
        .unwrap_or(ID_FLOOR)
        .max(ID_FLOOR)
}

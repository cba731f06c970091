//! End-to-end hydration: mock seed -> entity store -> memory slot.

use std::sync::Arc;

use schoolbook_core::model::{AttendanceRecord, Class, Student, StudentStatus};
use schoolbook_core::snapshot::{StoreSnapshot, STORE_KEY};
use schoolbook_core::store::EntityStore;
use schoolbook_core::traits::KeyValueStore;
use schoolbook_seed::{BundledSeed, MockSeed};
use schoolbook_storage::MemoryStore;

fn sample_students() -> Vec<Student> {
    vec![Student {
        id: "S1001".into(),
        name: "Ana Torres".into(),
        grade: "6".into(),
        email: "ana@school.test".into(),
        phone: None,
        attendance_rate: 0.95,
        status: StudentStatus::Active,
        class_id: Some("C1".into()),
    }]
}

fn sample_classes() -> Vec<Class> {
    vec![Class {
        id: "C1".into(),
        name: "Grade 6A".into(),
        grade: "6".into(),
        teacher: "Priya Nair".into(),
        schedule: "Mon-Fri 08:30".into(),
    }]
}

fn sample_attendance() -> Vec<AttendanceRecord> {
    vec![AttendanceRecord {
        id: "A1".into(),
        date: "2024-03-04".into(),
        class_id: "C1".into(),
        student_id: "S1001".into(),
        present: true,
    }]
}

#[tokio::test]
async fn load_hydrates_and_persists_through_the_memory_slot() {
    let seed = Arc::new(MockSeed::new(
        sample_students(),
        sample_classes(),
        sample_attendance(),
    ));
    let storage = Arc::new(MemoryStore::new());

    struct Shared(Arc<MemoryStore>);
    impl KeyValueStore for Shared {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, schoolbook_core::error::StorageError> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &[u8]) -> Result<(), schoolbook_core::error::StorageError> {
            self.0.set(key, value)
        }
    }

    let mut store = EntityStore::open(
        Arc::clone(&seed) as Arc<dyn schoolbook_core::traits::SeedSource>,
        Box::new(Shared(Arc::clone(&storage))),
    );

    store.load().await.unwrap();
    store.load().await.unwrap();

    // Exactly one fetch of each collection despite two load calls.
    assert_eq!(seed.fetch_counts(), (1, 1, 1));
    // Hydration itself write-throughs once.
    assert_eq!(storage.write_count(), 1);

    // The persisted bytes decode to the state we just loaded.
    let bytes = storage.get(STORE_KEY).unwrap().unwrap();
    let snapshot = StoreSnapshot::decode(&bytes).unwrap();
    assert!(snapshot.loaded);
    assert_eq!(snapshot.students.len(), 1);
    assert_eq!(snapshot.attendance.len(), 1);

    // A fresh store over the same slot restores without refetching.
    let reopened = EntityStore::open(
        Arc::clone(&seed) as Arc<dyn schoolbook_core::traits::SeedSource>,
        Box::new(Shared(Arc::clone(&storage))),
    );
    assert!(reopened.is_loaded());
    assert_eq!(seed.fetch_counts(), (1, 1, 1));
}

#[tokio::test]
async fn failed_collection_fails_the_whole_load() {
    let seed = Arc::new(
        MockSeed::new(sample_students(), sample_classes(), sample_attendance())
            .failing("classes"),
    );
    let mut store = EntityStore::open(seed, Box::new(MemoryStore::new()));

    assert!(store.load().await.is_err());
    assert!(!store.is_loaded());
    assert!(store.students().is_empty());
}

#[tokio::test]
async fn bundled_seed_hydrates_a_real_store() {
    let seed = Arc::new(BundledSeed::with_delay(std::time::Duration::ZERO));
    let mut store = EntityStore::open(seed, Box::new(MemoryStore::new()));

    store.load().await.unwrap();
    assert_eq!(store.students().len(), 12);
    assert_eq!(store.classes().len(), 4);
    assert!(!store.attendance().is_empty());
}

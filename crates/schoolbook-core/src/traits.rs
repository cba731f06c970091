//! Trait seams for seed data and durable storage.
//!
//! Implemented by the `schoolbook-seed` and `schoolbook-storage` crates
//! respectively; the entity store only ever sees these traits.

use async_trait::async_trait;

use crate::error::{SeedError, StorageError};
use crate::model::{AttendanceRecord, Class, Student};

/// An external source of the three seed collections.
///
/// Fetches are independent; the store issues all three concurrently and
/// hydrates only when every one succeeds.
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Fetch the student roster.
    async fn fetch_students(&self) -> Result<Vec<Student>, SeedError>;

    /// Fetch the class list.
    async fn fetch_classes(&self) -> Result<Vec<Class>, SeedError>;

    /// Fetch the attendance log.
    async fn fetch_attendance(&self) -> Result<Vec<AttendanceRecord>, SeedError>;
}

/// An opaque durable key-value slot holding byte strings.
///
/// The store writes one serialized snapshot under a single fixed key;
/// nothing in this trait knows about the snapshot shape.
pub trait KeyValueStore: Send + Sync {
    /// Read the bytes stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the bytes stored under `key`.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

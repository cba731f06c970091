//! Versioned snapshot codec, the persistence boundary.
//!
//! One snapshot of the full store state is serialized as JSON under a
//! single fixed key. The original persisted the same shape without a
//! version tag; the tag lets a future build refuse records it does not
//! understand instead of misreading them.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::model::{AttendanceRecord, Class, Student};

/// The fixed key the snapshot lives under, kept from the original store.
pub const STORE_KEY: &str = "school-admin-store";

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The full persisted state of the entity store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    /// Format version; see [`SNAPSHOT_VERSION`].
    pub version: u32,
    pub students: Vec<Student>,
    pub classes: Vec<Class>,
    pub attendance: Vec<AttendanceRecord>,
    /// Whether the one-time seed hydration has already happened.
    pub loaded: bool,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            students: Vec::new(),
            classes: Vec::new(),
            attendance: Vec::new(),
            loaded: false,
        }
    }
}

impl StoreSnapshot {
    /// Serialize to the persisted byte form.
    pub fn encode(&self) -> Result<Vec<u8>, StorageError> {
        serde_json::to_vec(self).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    /// Decode persisted bytes, rejecting unknown versions.
    ///
    /// Callers are expected to fall back to [`StoreSnapshot::default`]
    /// on any error rather than crash on a stale or garbled record.
    pub fn decode(bytes: &[u8]) -> Result<Self, StorageError> {
        let snapshot: StoreSnapshot =
            serde_json::from_slice(bytes).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(snapshot.version));
        }
        Ok(snapshot)
    }
}

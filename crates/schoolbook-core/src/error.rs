//! Error types shared across the schoolbook crates.
//!
//! Defined in `schoolbook-core` so the seed and storage crates implement
//! the core traits against one error taxonomy instead of each inventing
//! their own.

use thiserror::Error;

/// Errors from a seed source fetch.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The underlying dataset could not be read.
    #[error("seed dataset unavailable: {0}")]
    Unavailable(String),

    /// The dataset was read but did not parse as the expected shape.
    #[error("malformed seed data for {collection}: {message}")]
    Malformed {
        collection: &'static str,
        message: String,
    },
}

/// Errors from the durable key-value slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O failure while reading or writing the slot.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored bytes could not be decoded as a snapshot.
    #[error("stored snapshot is unreadable: {0}")]
    Corrupt(String),

    /// The stored snapshot carries a version this build does not know.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
}

/// Errors from [`crate::store::EntityStore::load`], the only fallible
/// store operation.
#[derive(Debug, Error)]
pub enum LoadError {
    /// One of the three seed fetches failed; nothing was replaced.
    #[error("seed fetch failed: {0}")]
    Seed(#[from] SeedError),

    /// Hydration did not finish within the configured timeout.
    #[error("load timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// Boundary validation failures for a [`crate::model::StudentDraft`].
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("student name must not be empty")]
    EmptyName,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("attendance rate {0} is outside [0, 1]")]
    RateOutOfRange(f64),
}

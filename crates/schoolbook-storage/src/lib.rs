//! schoolbook-storage: durable key-value slots.
//!
//! Implements the `KeyValueStore` trait from `schoolbook-core`: a
//! file-backed store for real use and an in-memory store for tests.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

//! schoolbook-seed: seed data sources.
//!
//! Implements the `SeedSource` trait from `schoolbook-core`: a bundled
//! dataset with simulated fetch latency for normal use, and a fully
//! scriptable mock for tests.

pub mod bundled;
pub mod mock;

pub use bundled::BundledSeed;
pub use mock::MockSeed;

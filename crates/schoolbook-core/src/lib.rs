//! schoolbook-core: entity store, snapshot codec, and derived analytics.
//!
//! This crate owns the canonical student/class/attendance collections and
//! the pure functions that compute dashboard views from them. Seed sources
//! and durable storage plug in through the traits in [`traits`].

pub mod analytics;
pub mod error;
pub mod model;
pub mod snapshot;
pub mod store;
pub mod traits;

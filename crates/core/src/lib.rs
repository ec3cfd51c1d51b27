//! Domain layer for the greenlight movie-analytics engine.
//!
//! This crate has no I/O and no database dependency. It holds the shared
//! type aliases, the error taxonomy, full-text match-query construction,
//! and the validated parameter types consumed by `greenlight-db`.

pub mod error;
pub mod params;
pub mod search;
pub mod types;

pub use error::CoreError;

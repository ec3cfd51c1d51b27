//! Model structs mirroring the schema rows, plus analytical result rows.
//!
//! Entity rows derive `FromRow` + `Serialize`; because primary keys come
//! from the source dataset (never auto-generated), the same structs also
//! derive `Deserialize` and double as ingestion records.

pub mod analytics;
pub mod credits;
pub mod links;
pub mod lookup;
pub mod movie;
pub mod person;
pub mod rating;

//! Cast and crew association rows (payload-carrying).

use greenlight_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movie_cast` table.
///
/// `cast_order` is a zero-based billing rank; the same person may appear
/// for one movie only at distinct cast_order values.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CastCredit {
    pub movie_id: DbId,
    pub person_id: DbId,
    pub cast_order: i64,
    pub character_name: Option<String>,
}

/// A row from the `movie_crew` table.
///
/// Identity is (movie, person, department, job): one person may hold many
/// distinct roles on a movie, never the identical role twice.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CrewCredit {
    pub movie_id: DbId,
    pub person_id: DbId,
    pub department: String,
    pub job: String,
}

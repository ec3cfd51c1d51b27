//! Movie entity model.

use greenlight_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
///
/// `budget` and `revenue` of 0 denote "unknown", not "free"; queries that
/// reason about money filter zeros out explicitly.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: DbId,
    pub title: String,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub release_date: Option<Date>,
    pub release_year: Option<i64>,
    pub runtime: Option<i64>,
    pub budget: i64,
    pub revenue: i64,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub tagline: Option<String>,
    pub overview: Option<String>,
}

//! Denormalized per-movie rating summary.

use greenlight_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movie_ratings_summary` table.
///
/// One-to-one with `movies`, derived at load time. The analytical queries
/// never read it; `movies.vote_average` / `vote_count` stay authoritative.
#[derive(Debug, Clone, Copy, FromRow, Serialize, Deserialize)]
pub struct RatingSummary {
    pub movie_id: DbId,
    pub rating_avg: Option<f64>,
    pub rating_count: Option<i64>,
}

//! Payload-free association rows.

use greenlight_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movie_genres` junction table.
#[derive(Debug, Clone, Copy, FromRow, Serialize, Deserialize)]
pub struct MovieGenre {
    pub movie_id: DbId,
    pub genre_id: DbId,
}

/// A row from the `movie_keywords` junction table.
#[derive(Debug, Clone, Copy, FromRow, Serialize, Deserialize)]
pub struct MovieKeyword {
    pub movie_id: DbId,
    pub keyword_id: DbId,
}

//! Lookup entities: genres and keywords.

use greenlight_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Genre {
    pub genre_id: DbId,
    pub name: String,
}

/// A row from the `keywords` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword_id: DbId,
    pub name: String,
}

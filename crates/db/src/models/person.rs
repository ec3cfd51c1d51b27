//! Person entity model.

use greenlight_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `people` table. Names are display names and are not
/// unique; two people may share one.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Person {
    pub person_id: DbId,
    pub name: String,
}

//! Repository for the `people` table.

use greenlight_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::person::Person;

/// Load and lookup operations for people (actors, directors, crew).
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a batch of people atomically; re-sent ids are skipped.
    pub async fn insert_batch(pool: &SqlitePool, people: &[Person]) -> Result<u64, sqlx::Error> {
        if people.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;
        let mut inserted = 0u64;
        for p in people {
            inserted += sqlx::query(
                "INSERT OR IGNORE INTO people (person_id, name) VALUES (?1, ?2)",
            )
            .bind(p.person_id)
            .bind(&p.name)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;

        tracing::debug!(batch = people.len(), inserted, "loaded person batch");
        Ok(inserted)
    }

    /// Find a person by id. Returns `None` if absent.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        sqlx::query_as::<_, Person>("SELECT person_id, name FROM people WHERE person_id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

//! Repository for the `movie_cast` table.

use sqlx::SqlitePool;

use crate::models::credits::CastCredit;

/// Load operations for cast credits.
pub struct CastRepo;

impl CastRepo {
    /// Insert a batch of cast credits as one atomic unit.
    ///
    /// Credits whose movie or person has not been loaded are skipped, as
    /// are exact duplicates of an existing (movie, person, cast_order)
    /// identity. Returns the number of credits actually inserted.
    pub async fn insert_batch(
        pool: &SqlitePool,
        credits: &[CastCredit],
    ) -> Result<u64, sqlx::Error> {
        if credits.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;
        let mut inserted = 0u64;
        for c in credits {
            inserted += sqlx::query(
                "INSERT OR IGNORE INTO movie_cast \
                     (movie_id, person_id, cast_order, character_name) \
                 SELECT ?1, ?2, ?3, ?4 \
                 WHERE EXISTS (SELECT 1 FROM movies WHERE movie_id = ?1) \
                   AND EXISTS (SELECT 1 FROM people WHERE person_id = ?2)",
            )
            .bind(c.movie_id)
            .bind(c.person_id)
            .bind(c.cast_order)
            .bind(&c.character_name)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;

        tracing::debug!(batch = credits.len(), inserted, "loaded cast batch");
        Ok(inserted)
    }
}

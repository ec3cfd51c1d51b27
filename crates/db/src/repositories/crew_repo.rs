//! Repository for the `movie_crew` table.

use sqlx::SqlitePool;

use crate::models::credits::CrewCredit;

/// Load operations for crew credits.
pub struct CrewRepo;

impl CrewRepo {
    /// Insert a batch of crew credits as one atomic unit.
    ///
    /// Credits whose movie or person has not been loaded are skipped, as
    /// are exact duplicates of an existing (movie, person, department, job)
    /// identity. Returns the number of credits actually inserted.
    pub async fn insert_batch(
        pool: &SqlitePool,
        credits: &[CrewCredit],
    ) -> Result<u64, sqlx::Error> {
        if credits.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;
        let mut inserted = 0u64;
        for c in credits {
            inserted += sqlx::query(
                "INSERT OR IGNORE INTO movie_crew \
                     (movie_id, person_id, department, job) \
                 SELECT ?1, ?2, ?3, ?4 \
                 WHERE EXISTS (SELECT 1 FROM movies WHERE movie_id = ?1) \
                   AND EXISTS (SELECT 1 FROM people WHERE person_id = ?2)",
            )
            .bind(c.movie_id)
            .bind(c.person_id)
            .bind(&c.department)
            .bind(&c.job)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;

        tracing::debug!(batch = credits.len(), inserted, "loaded crew batch");
        Ok(inserted)
    }
}

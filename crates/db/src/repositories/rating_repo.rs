//! Repository for the `movie_ratings_summary` table.

use greenlight_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::rating::RatingSummary;

/// Load operations for the denormalized rating summaries.
pub struct RatingRepo;

impl RatingRepo {
    /// Upsert a batch of rating summaries as one atomic unit.
    ///
    /// Uses `ON CONFLICT (movie_id) DO UPDATE` to guarantee one row per
    /// movie; summaries for movies that have not been loaded are skipped.
    pub async fn upsert_batch(
        pool: &SqlitePool,
        summaries: &[RatingSummary],
    ) -> Result<u64, sqlx::Error> {
        if summaries.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;
        let mut written = 0u64;
        for s in summaries {
            written += sqlx::query(
                "INSERT INTO movie_ratings_summary (movie_id, rating_avg, rating_count) \
                 SELECT ?1, ?2, ?3 \
                 WHERE EXISTS (SELECT 1 FROM movies WHERE movie_id = ?1) \
                 ON CONFLICT (movie_id) DO UPDATE \
                 SET rating_avg = excluded.rating_avg, \
                     rating_count = excluded.rating_count",
            )
            .bind(s.movie_id)
            .bind(s.rating_avg)
            .bind(s.rating_count)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;

        tracing::debug!(batch = summaries.len(), written, "loaded rating summaries");
        Ok(written)
    }

    /// Find the summary for a movie. Returns `None` if absent.
    pub async fn find_by_movie(
        pool: &SqlitePool,
        movie_id: DbId,
    ) -> Result<Option<RatingSummary>, sqlx::Error> {
        sqlx::query_as::<_, RatingSummary>(
            "SELECT movie_id, rating_avg, rating_count \
             FROM movie_ratings_summary WHERE movie_id = ?1",
        )
        .bind(movie_id)
        .fetch_optional(pool)
        .await
    }
}

//! Repository for the `genres` and `movie_genres` tables.

use sqlx::SqlitePool;

use crate::models::links::MovieGenre;
use crate::models::lookup::Genre;

/// Load and lookup operations for genres and their movie links.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a batch of genres atomically. Re-sent rows with an already
    /// loaded id are skipped, so lookup loads are idempotent.
    pub async fn insert_batch(pool: &SqlitePool, genres: &[Genre]) -> Result<u64, sqlx::Error> {
        if genres.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;
        let mut inserted = 0u64;
        for g in genres {
            inserted += sqlx::query(
                "INSERT OR IGNORE INTO genres (genre_id, name) VALUES (?1, ?2)",
            )
            .bind(g.genre_id)
            .bind(&g.name)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;

        tracing::debug!(batch = genres.len(), inserted, "loaded genre batch");
        Ok(inserted)
    }

    /// Link movies to genres in one atomic batch.
    ///
    /// Rows whose movie or genre has not been loaded are skipped rather
    /// than failing the batch; duplicates are skipped as well. Returns the
    /// number of links actually created.
    pub async fn link_movies(pool: &SqlitePool, links: &[MovieGenre]) -> Result<u64, sqlx::Error> {
        if links.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;
        let mut linked = 0u64;
        for l in links {
            linked += sqlx::query(
                "INSERT OR IGNORE INTO movie_genres (movie_id, genre_id) \
                 SELECT ?1, ?2 \
                 WHERE EXISTS (SELECT 1 FROM movies WHERE movie_id = ?1) \
                   AND EXISTS (SELECT 1 FROM genres WHERE genre_id = ?2)",
            )
            .bind(l.movie_id)
            .bind(l.genre_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;

        tracing::debug!(batch = links.len(), linked, "linked movie genres");
        Ok(linked)
    }

    /// Find a genre by its unique display name.
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT genre_id, name FROM genres WHERE name = ?1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}

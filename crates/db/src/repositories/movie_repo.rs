//! Repository for the `movies` table.

use greenlight_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::movie::Movie;

/// Column list for `movies` queries.
const COLUMNS: &str = "\
    movie_id, title, original_title, original_language, \
    release_date, release_year, runtime, budget, revenue, \
    popularity, vote_average, vote_count, tagline, overview";

/// Load and lookup operations for movies. Movie rows are immutable after
/// load; there is no update path.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a batch of movies as one atomic unit.
    ///
    /// Any constraint violation rolls the whole batch back; previously
    /// committed batches are unaffected.
    pub async fn insert_batch(pool: &SqlitePool, movies: &[Movie]) -> Result<u64, sqlx::Error> {
        if movies.is_empty() {
            return Ok(0);
        }

        let query = format!(
            "INSERT INTO movies ({COLUMNS}) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)"
        );

        let mut tx = pool.begin().await?;
        let mut inserted = 0u64;
        for m in movies {
            inserted += sqlx::query(&query)
                .bind(m.movie_id)
                .bind(&m.title)
                .bind(&m.original_title)
                .bind(&m.original_language)
                .bind(m.release_date)
                .bind(m.release_year)
                .bind(m.runtime)
                .bind(m.budget)
                .bind(m.revenue)
                .bind(m.popularity)
                .bind(m.vote_average)
                .bind(m.vote_count)
                .bind(&m.tagline)
                .bind(&m.overview)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }
        tx.commit().await?;

        tracing::debug!(batch = movies.len(), inserted, "loaded movie batch");
        Ok(inserted)
    }

    /// Find a movie by id. Returns `None` if absent.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE movie_id = ?1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of loaded movies.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Delete a movie. Cascades to its associations and ratings summary.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE movie_id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

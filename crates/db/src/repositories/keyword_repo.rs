//! Repository for the `keywords` and `movie_keywords` tables.

use sqlx::SqlitePool;

use crate::models::links::MovieKeyword;
use crate::models::lookup::Keyword;

/// Load operations for keywords and their movie links.
pub struct KeywordRepo;

impl KeywordRepo {
    /// Insert a batch of keywords atomically; re-sent ids are skipped.
    pub async fn insert_batch(pool: &SqlitePool, keywords: &[Keyword]) -> Result<u64, sqlx::Error> {
        if keywords.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;
        let mut inserted = 0u64;
        for k in keywords {
            inserted += sqlx::query(
                "INSERT OR IGNORE INTO keywords (keyword_id, name) VALUES (?1, ?2)",
            )
            .bind(k.keyword_id)
            .bind(&k.name)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;

        tracing::debug!(batch = keywords.len(), inserted, "loaded keyword batch");
        Ok(inserted)
    }

    /// Link movies to keywords in one atomic batch, skipping rows whose
    /// movie or keyword is absent.
    pub async fn link_movies(
        pool: &SqlitePool,
        links: &[MovieKeyword],
    ) -> Result<u64, sqlx::Error> {
        if links.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;
        let mut linked = 0u64;
        for l in links {
            linked += sqlx::query(
                "INSERT OR IGNORE INTO movie_keywords (movie_id, keyword_id) \
                 SELECT ?1, ?2 \
                 WHERE EXISTS (SELECT 1 FROM movies WHERE movie_id = ?1) \
                   AND EXISTS (SELECT 1 FROM keywords WHERE keyword_id = ?2)",
            )
            .bind(l.movie_id)
            .bind(l.keyword_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;

        tracing::debug!(batch = links.len(), linked, "linked movie keywords");
        Ok(linked)
    }
}

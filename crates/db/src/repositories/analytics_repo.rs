//! The analytical query engine.
//!
//! Every method is a pure read: `(validated params) -> ordered rows`, with
//! no side effects on the schema, a fixed row cap, and an empty vector (not
//! an error) when nothing matches. Re-running any query with identical
//! parameters against unchanged data yields identical ordered output.
//!
//! Pair queries de-duplicate unordered pairs with an asymmetric join
//! predicate (`left_id < right_id`) rather than a post-filter, which also
//! prunes self-pairs and halves the join fan-out.

use greenlight_core::params::{
    ActorPairParams, ConceptSearchParams, DirectorRankingParams, GenrePairParams, SearchMode,
};
use greenlight_core::search::{
    build_match_query, ACTOR_PAIR_LIMIT, CONCEPT_SEARCH_LIMIT, DIRECTOR_JOB, GENRE_PAIR_LIMIT,
    PRINCIPAL_CAST_CUTOFF,
};
use sqlx::SqlitePool;

use crate::error::EngineResult;
use crate::models::analytics::{
    ActorPairRow, ConceptSearchRows, DirectorRevenueRow, GenrePairRow, PlotSearchRow,
    TitleSearchRow,
};

/// Read-only analytical queries over the loaded dataset.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Concept/title search, dispatching on the requested mode.
    pub async fn concept_search(
        pool: &SqlitePool,
        params: &ConceptSearchParams,
    ) -> EngineResult<ConceptSearchRows> {
        match params.mode {
            SearchMode::Plot => Self::search_plots(pool, params)
                .await
                .map(ConceptSearchRows::Plot),
            SearchMode::Title => Self::search_titles(pool, params)
                .await
                .map(ConceptSearchRows::Title),
        }
    }

    /// Plot-mode search: match `search_text` against movie overviews, keep
    /// only movies with known money figures, rank by gross.
    ///
    /// Match semantics are documented on
    /// [`greenlight_core::search::build_match_query`]: any-term (OR) match,
    /// unicode61 tokens, no stop-words. Zero-budget rows are excluded
    /// before `roi_ratio` is computed, so the division is always defined.
    pub async fn search_plots(
        pool: &SqlitePool,
        params: &ConceptSearchParams,
    ) -> EngineResult<Vec<PlotSearchRow>> {
        params.validate()?;
        let match_expr = match build_match_query("overview", &params.search_text) {
            Some(expr) => expr,
            None => return Ok(Vec::new()),
        };
        tracing::debug!(%match_expr, "plot search");

        let rows = sqlx::query_as::<_, PlotSearchRow>(
            "SELECT m.movie_id, m.title, m.release_year, m.budget, m.revenue, \
                    CAST(m.revenue AS REAL) / m.budget AS roi_ratio \
             FROM movies m \
             WHERE m.movie_id IN \
                   (SELECT rowid FROM movie_search WHERE movie_search MATCH ?1) \
               AND m.budget > 0 \
               AND m.revenue > 0 \
             ORDER BY m.revenue DESC \
             LIMIT ?2",
        )
        .bind(&match_expr)
        .bind(CONCEPT_SEARCH_LIMIT)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Title-mode search: match `search_text` against movie titles, rank by
    /// popularity.
    pub async fn search_titles(
        pool: &SqlitePool,
        params: &ConceptSearchParams,
    ) -> EngineResult<Vec<TitleSearchRow>> {
        params.validate()?;
        let match_expr = match build_match_query("title", &params.search_text) {
            Some(expr) => expr,
            None => return Ok(Vec::new()),
        };
        tracing::debug!(%match_expr, "title search");

        let rows = sqlx::query_as::<_, TitleSearchRow>(
            "SELECT m.movie_id, m.title, m.popularity, m.vote_average, m.vote_count \
             FROM movies m \
             WHERE m.movie_id IN \
                   (SELECT rowid FROM movie_search WHERE movie_search MATCH ?1) \
             ORDER BY m.popularity DESC \
             LIMIT ?2",
        )
        .bind(&match_expr)
        .bind(CONCEPT_SEARCH_LIMIT)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Rank principal-cast pairs by the average rating of their shared
    /// movies.
    ///
    /// The self-join keeps `c1.person_id < c2.person_id`, so each unordered
    /// pair is produced exactly once and never reversed. Only billing ranks
    /// below the principal-cast cutoff participate.
    pub async fn rank_actor_pairs(
        pool: &SqlitePool,
        params: &ActorPairParams,
    ) -> EngineResult<Vec<ActorPairRow>> {
        params.validate()?;

        let rows = sqlx::query_as::<_, ActorPairRow>(
            "SELECT c1.person_id AS person_id_a, p1.name AS name_a, \
                    c2.person_id AS person_id_b, p2.name AS name_b, \
                    COUNT(*) AS movies_together, \
                    AVG(m.vote_average) AS avg_rating \
             FROM movie_cast c1 \
             JOIN movie_cast c2 \
               ON c2.movie_id = c1.movie_id \
              AND c1.person_id < c2.person_id \
             JOIN people p1 ON p1.person_id = c1.person_id \
             JOIN people p2 ON p2.person_id = c2.person_id \
             JOIN movies m ON m.movie_id = c1.movie_id \
             WHERE c1.cast_order < ?1 \
               AND c2.cast_order < ?1 \
             GROUP BY c1.person_id, c2.person_id \
             HAVING COUNT(*) >= ?2 \
             ORDER BY avg_rating DESC \
             LIMIT ?3",
        )
        .bind(PRINCIPAL_CAST_CUTOFF)
        .bind(params.min_movies_together)
        .bind(ACTOR_PAIR_LIMIT)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Rank directors by total gross across their movies with known
    /// revenue.
    ///
    /// The inner `SELECT DISTINCT` collapses a director credited for one
    /// movie under several departments to a single qualifying movie, so
    /// neither the count nor the sum double-counts.
    pub async fn rank_directors_by_revenue(
        pool: &SqlitePool,
        params: &DirectorRankingParams,
    ) -> EngineResult<Vec<DirectorRevenueRow>> {
        params.validate()?;

        let rows = sqlx::query_as::<_, DirectorRevenueRow>(
            "SELECT p.person_id, p.name, \
                    COUNT(*) AS movies_directed, \
                    SUM(d.revenue) AS total_revenue \
             FROM (SELECT DISTINCT c.person_id, m.movie_id, m.revenue \
                   FROM movie_crew c \
                   JOIN movies m ON m.movie_id = c.movie_id \
                   WHERE c.job = ?1 \
                     AND m.revenue > 0) d \
             JOIN people p ON p.person_id = d.person_id \
             GROUP BY p.person_id \
             ORDER BY total_revenue DESC \
             LIMIT ?2",
        )
        .bind(DIRECTOR_JOB)
        .bind(params.top_n)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Rank genre pairs by average revenue across co-tagged movies grossing
    /// at least `min_revenue`.
    ///
    /// Same asymmetric-join de-duplication as the actor-pair ranking,
    /// applied to `movie_genres`.
    pub async fn rank_genre_pairs(
        pool: &SqlitePool,
        params: &GenrePairParams,
    ) -> EngineResult<Vec<GenrePairRow>> {
        params.validate()?;

        let rows = sqlx::query_as::<_, GenrePairRow>(
            "SELECT g1.genre_id AS genre_id_a, g1.name AS genre_a, \
                    g2.genre_id AS genre_id_b, g2.name AS genre_b, \
                    COUNT(*) AS movie_count, \
                    AVG(m.revenue) AS avg_revenue \
             FROM movie_genres mg1 \
             JOIN movie_genres mg2 \
               ON mg2.movie_id = mg1.movie_id \
              AND mg1.genre_id < mg2.genre_id \
             JOIN genres g1 ON g1.genre_id = mg1.genre_id \
             JOIN genres g2 ON g2.genre_id = mg2.genre_id \
             JOIN movies m ON m.movie_id = mg1.movie_id \
             WHERE m.revenue >= ?1 \
             GROUP BY mg1.genre_id, mg2.genre_id \
             ORDER BY avg_revenue DESC \
             LIMIT ?2",
        )
        .bind(params.min_revenue)
        .bind(GENRE_PAIR_LIMIT)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}

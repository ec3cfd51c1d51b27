//! Result rows returned by the analytical queries.
//!
//! Flat records for a presentation layer; currency and ratio formatting is
//! the caller's concern.

use greenlight_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One plot-search hit: a matched movie with its profitability proxy.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PlotSearchRow {
    pub movie_id: DbId,
    pub title: String,
    pub release_year: Option<i64>,
    pub budget: i64,
    pub revenue: i64,
    /// revenue / budget; rows with unknown (zero) budget are filtered out
    /// before this is computed.
    pub roi_ratio: f64,
}

/// One title-search hit, ranked by popularity.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TitleSearchRow {
    pub movie_id: DbId,
    pub title: String,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
}

/// Result of a concept search; the variant follows the requested mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConceptSearchRows {
    Plot(Vec<PlotSearchRow>),
    Title(Vec<TitleSearchRow>),
}

/// An unordered principal-cast pair and its collaboration stats.
///
/// `person_id_a < person_id_b` always holds; each pair appears once.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ActorPairRow {
    pub person_id_a: DbId,
    pub name_a: String,
    pub person_id_b: DbId,
    pub name_b: String,
    pub movies_together: i64,
    pub avg_rating: f64,
}

/// A director with their qualifying-movie count and summed gross.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DirectorRevenueRow {
    pub person_id: DbId,
    pub name: String,
    pub movies_directed: i64,
    pub total_revenue: i64,
}

/// An unordered genre pair and its revenue stats.
///
/// `genre_id_a < genre_id_b` always holds; each pair appears once.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct GenrePairRow {
    pub genre_id_a: DbId,
    pub genre_a: String,
    pub genre_id_b: DbId,
    pub genre_b: String,
    pub movie_count: i64,
    pub avg_revenue: f64,
}

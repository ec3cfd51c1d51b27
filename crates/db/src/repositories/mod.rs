//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Ingestion repositories wrap
//! each batch in one transaction (a movie and its associations become
//! visible together or not at all); `AnalyticsRepo` holds the read-only
//! query engine.

pub mod analytics_repo;
pub mod cast_repo;
pub mod crew_repo;
pub mod genre_repo;
pub mod keyword_repo;
pub mod movie_repo;
pub mod person_repo;
pub mod rating_repo;

pub use analytics_repo::AnalyticsRepo;
pub use cast_repo::CastRepo;
pub use crew_repo::CrewRepo;
pub use genre_repo::GenreRepo;
pub use keyword_repo::KeywordRepo;
pub use movie_repo::MovieRepo;
pub use person_repo::PersonRepo;
pub use rating_repo::RatingRepo;

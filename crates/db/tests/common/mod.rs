//! Shared fixture data for the analytics integration tests.
//!
//! A small but complete catalog: four movies across three genres, five
//! people (three actors, two directors), cast/crew credits, keywords, and
//! one rating summary. Chosen so every analytical query has qualifying and
//! non-qualifying rows.

use chrono::NaiveDate;
use greenlight_db::models::credits::{CastCredit, CrewCredit};
use greenlight_db::models::links::{MovieGenre, MovieKeyword};
use greenlight_db::models::lookup::{Genre, Keyword};
use greenlight_db::models::movie::Movie;
use greenlight_db::models::person::Person;
use greenlight_db::models::rating::RatingSummary;
use greenlight_db::repositories::{
    CastRepo, CrewRepo, GenreRepo, KeywordRepo, MovieRepo, PersonRepo, RatingRepo,
};
use sqlx::SqlitePool;

pub fn movie(
    movie_id: i64,
    title: &str,
    overview: &str,
    budget: i64,
    revenue: i64,
    vote_average: f64,
    popularity: f64,
) -> Movie {
    Movie {
        movie_id,
        title: title.to_string(),
        original_title: None,
        original_language: Some("en".to_string()),
        release_date: NaiveDate::from_ymd_opt(2015, 6, 12),
        release_year: Some(2015),
        runtime: Some(112),
        budget,
        revenue,
        popularity,
        vote_average,
        vote_count: 1000,
        tagline: None,
        overview: Some(overview.to_string()),
    }
}

pub fn cast(movie_id: i64, person_id: i64, cast_order: i64) -> CastCredit {
    CastCredit {
        movie_id,
        person_id,
        cast_order,
        character_name: None,
    }
}

pub fn crew(movie_id: i64, person_id: i64, department: &str, job: &str) -> CrewCredit {
    CrewCredit {
        movie_id,
        person_id,
        department: department.to_string(),
        job: job.to_string(),
    }
}

fn person(person_id: i64, name: &str) -> Person {
    Person {
        person_id,
        name: name.to_string(),
    }
}

fn genre(genre_id: i64, name: &str) -> Genre {
    Genre {
        genre_id,
        name: name.to_string(),
    }
}

/// Load the standard catalog, parents before children.
pub async fn seed_catalog(pool: &SqlitePool) {
    let movies = [
        movie(
            1,
            "Starfall",
            "A heist crew infiltrates an orbital casino",
            10_000_000,
            50_000_000,
            8.0,
            40.0,
        ),
        movie(
            2,
            "Starfall Rising",
            "The heist crew returns for one last score",
            20_000_000,
            30_000_000,
            9.0,
            90.0,
        ),
        // Unknown money figures: excluded from every revenue-based query.
        movie(3, "Quiet Harbor", "A heist of memories in a coastal town", 0, 0, 7.5, 10.0),
        movie(
            4,
            "Crimson Ledger",
            "An accountant uncovers a mob conspiracy",
            5_000_000,
            0,
            6.0,
            25.0,
        ),
    ];
    MovieRepo::insert_batch(pool, &movies).await.unwrap();

    let genres = [genre(1, "Action"), genre(2, "Science Fiction"), genre(3, "Drama")];
    GenreRepo::insert_batch(pool, &genres).await.unwrap();

    let keywords = [
        Keyword {
            keyword_id: 100,
            name: "heist".to_string(),
        },
        Keyword {
            keyword_id: 101,
            name: "space".to_string(),
        },
    ];
    KeywordRepo::insert_batch(pool, &keywords).await.unwrap();

    let people = [
        person(10, "Ava Chen"),
        person(20, "Ben Ortiz"),
        person(30, "Carol Novak"),
        person(40, "Dev Ramaswamy"),
        person(50, "Elle Park"),
    ];
    PersonRepo::insert_batch(pool, &people).await.unwrap();

    let genre_links = [
        MovieGenre { movie_id: 1, genre_id: 1 },
        MovieGenre { movie_id: 1, genre_id: 2 },
        MovieGenre { movie_id: 2, genre_id: 1 },
        MovieGenre { movie_id: 2, genre_id: 2 },
        MovieGenre { movie_id: 3, genre_id: 3 },
        MovieGenre { movie_id: 4, genre_id: 1 },
        MovieGenre { movie_id: 4, genre_id: 3 },
    ];
    GenreRepo::link_movies(pool, &genre_links).await.unwrap();

    let keyword_links = [
        MovieKeyword { movie_id: 1, keyword_id: 100 },
        MovieKeyword { movie_id: 1, keyword_id: 101 },
        MovieKeyword { movie_id: 2, keyword_id: 100 },
    ];
    KeywordRepo::link_movies(pool, &keyword_links).await.unwrap();

    let cast_credits = [
        cast(1, 10, 0),
        cast(1, 20, 1),
        // Billing rank 12: outside the principal cast, never pairs.
        cast(1, 30, 12),
        cast(2, 10, 0),
        cast(2, 20, 2),
        cast(3, 10, 0),
        cast(3, 30, 1),
    ];
    CastRepo::insert_batch(pool, &cast_credits).await.unwrap();

    let crew_credits = [
        crew(1, 40, "Directing", "Director"),
        crew(1, 50, "Writing", "Writer"),
        crew(2, 40, "Directing", "Director"),
        // Same movie, same director, second department: must not
        // double-count movie 2 in the revenue ranking.
        crew(2, 40, "Production", "Director"),
        // Elle only directs movies with unknown revenue.
        crew(3, 50, "Directing", "Director"),
        crew(4, 50, "Directing", "Director"),
    ];
    CrewRepo::insert_batch(pool, &crew_credits).await.unwrap();

    let summaries = [RatingSummary {
        movie_id: 1,
        rating_avg: Some(7.9),
        rating_count: Some(1200),
    }];
    RatingRepo::upsert_batch(pool, &summaries).await.unwrap();
}

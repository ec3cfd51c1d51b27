//! Schema model and analytical query engine for the greenlight movie
//! dataset.
//!
//! The schema lives in `migrations/`; model structs mirror its rows and the
//! repository layer provides batch ingestion plus the read-only analytical
//! queries. All SQL parameters are bound as data values.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;

pub use config::DatabaseConfig;
pub use error::{EngineError, EngineResult};

pub type DbPool = sqlx::SqlitePool;

/// Embedded schema migrations, applied in order at startup.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create a connection pool from an explicit configuration object.
///
/// Foreign-key enforcement is switched on for every connection; cascade
/// deletes depend on it.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Apply any pending schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Cheap connectivity probe.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

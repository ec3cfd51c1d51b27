/// Database configuration loaded from environment variables.
///
/// Passed explicitly into [`crate::create_pool`]; there is no ambient
/// global configuration state.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL (default: `sqlite://greenlight.db`).
    pub url: String,
    /// Maximum pooled connections (default: `8`).
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                 |
    /// |----------------------|-------------------------|
    /// | `DATABASE_URL`       | `sqlite://greenlight.db`|
    /// | `DB_MAX_CONNECTIONS` | `8`                     |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://greenlight.db".into());

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "8".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            url,
            max_connections,
        }
    }
}

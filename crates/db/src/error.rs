use greenlight_core::CoreError;

/// Error type for the query engine and ingestion repositories.
///
/// Parameter violations are caught before any SQL executes; everything else
/// surfaces the underlying `sqlx` error. An empty result set is never an
/// error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A query parameter failed validation.
    #[error(transparent)]
    Parameter(#[from] CoreError),

    /// A database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for engine return values.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Whether the caller may usefully retry the same call.
    ///
    /// Connectivity-class failures (I/O, pool exhaustion, pool shutdown)
    /// are retryable; parameter and constraint errors are not. The engine
    /// itself never retries — retry policy belongs to the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            EngineError::Database(err) => matches!(
                err,
                sqlx::Error::Io(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::WorkerCrashed
            ),
            EngineError::Parameter(_) => false,
        }
    }
}

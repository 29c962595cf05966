use thiserror::Error;

/// Errors raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A pooled connection could not be obtained.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The query itself failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored row violated a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// The write would leave a column outside its allowed range.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

use thiserror::Error;

/// Error type used by service layer functions.
///
/// The carried string is the exact message returned to the client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request was malformed.
    #[error("{0}")]
    BadRequest(String),
    /// Requested resource was not found.
    #[error("{0}")]
    NotFound(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

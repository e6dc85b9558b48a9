use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error taxonomy shared by every moderation and aggregation operation.
///
/// Failures are values: every use case returns `Result<_, DomainError>` and
/// the presentation layer maps the variant to a status code. Nothing in the
/// engine panics or throws past this boundary.
#[derive(Debug, Error, Serialize, Deserialize, PartialEq)]
pub enum DomainError {
    /// No actor identity could be resolved for the request.
    #[error("Unauthenticated")]
    Unauthenticated,
    /// Actor role is below the capability the operation requires.
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// Entity id did not resolve to a row.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Malformed payload: out-of-range rating, unknown action token,
    /// missing required field. Rejected before any state is touched.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Post-condition check failed, e.g. a deleted row that is still present.
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Underlying store unreachable or failing.
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
            other => DomainError::Unavailable(other.to_string()),
        }
    }
}

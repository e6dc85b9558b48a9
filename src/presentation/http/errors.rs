//! HTTP error handling and response conversion.
//!
//! Domain errors are values all the way to this boundary, where each kind is
//! mapped to a status code and a user-safe JSON body. No stack traces or
//! query text ever reach the caller.

use crate::domain::shared::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// No resolvable actor identity (401).
    Unauthenticated,

    /// Actor role below the required capability (403).
    Forbidden(String),

    /// Resource not found (404).
    NotFound(String),

    /// Malformed payload or action token (400).
    InvalidArgument(String),

    /// Post-condition violated, e.g. deletion verification failed (409).
    Conflict(String),

    /// Underlying store unreachable (503).
    Unavailable(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "Unauthenticated"),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-safe message without implementation details.
    fn user_message(&self) -> String {
        match self {
            Self::Unauthenticated => "Authentication required".into(),
            Self::Forbidden(msg) => msg.clone(),
            Self::NotFound(msg) => msg.clone(),
            Self::InvalidArgument(msg) => msg.clone(),
            Self::Conflict(msg) => msg.clone(),
            Self::Unavailable(_) => "Service temporarily unavailable".into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::NOT_FOUND
            | StatusCode::CONFLICT => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Unauthenticated => AppError::Unauthenticated,
            DomainError::Forbidden(msg) => AppError::Forbidden(msg),
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::InvalidArgument(msg) => AppError::InvalidArgument(msg),
            DomainError::Conflict(msg) => AppError::Conflict(msg),
            DomainError::Unavailable(msg) => {
                tracing::error!(store_error = %msg);
                AppError::Unavailable(msg)
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            sqlx::Error::PoolTimedOut => {
                tracing::warn!("Database connection pool exhausted, timing out");
                AppError::Unavailable("Connection pool exhausted".into())
            }
            sqlx::Error::PoolClosed => {
                tracing::error!("Database connection pool closed");
                AppError::Unavailable("Database connection unavailable".into())
            }
            _ => {
                tracing::error!(database_error = %err);
                AppError::Internal("Database error".into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("test".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("test".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Unavailable("test".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_domain_error_mapping() {
        let err: AppError = DomainError::InvalidArgument("rating out of range".into()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: AppError = DomainError::Unauthenticated.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}

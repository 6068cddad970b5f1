//! Request-level error handling.
//!
//! The wire contract is a bare status code with an empty body; the status
//! is the only signal a caller ever gets.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use social_core::error::RepoError;

/// Application-level error type for the HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Missing or unparseable required query parameter.
    BadRequest,
    /// No record in the state the operation expects.
    NotFound,
    /// Any repository or serialization failure.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest => write!(f, "Bad request"),
            AppError::NotFound => write!(f, "Not found"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            // The cause is logged, never reported to the caller.
            tracing::error!("Internal error: {}", detail);
        }

        HttpResponse::build(self.status_code()).finish()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound,
            RepoError::Connection(msg) | RepoError::Query(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

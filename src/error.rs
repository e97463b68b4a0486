//! API error type and its mapping to HTTP responses.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::schema::FieldError;
use crate::store::StoreError;

/// `GET /movies/:id` miss.
pub const MOVIE_NOT_FOUND: &str = "Movie not found";

/// `PATCH`/`DELETE` miss. Also reused verbatim by `PATCH` for a body that
/// fails validation; the wording is historical and clients depend on it.
pub const THE_MOVIE_WAS_NOT_FOUND: &str = "The movie was not found.";

/// Error type for request handling. Every variant resolves to a JSON body at
/// the request boundary; none is fatal to the process.
#[derive(Debug)]
pub enum ApiError {
    /// Creation payload failed full validation.
    Validation(Vec<FieldError>),
    /// Update payload failed partial validation.
    InvalidPatch,
    /// Unknown identifier. Carries the route-specific message.
    NotFound(&'static str),
    /// Collection store failure.
    Store(StoreError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(errors) => {
                write!(f, "validation failed on {} field(s)", errors.len())
            }
            ApiError::InvalidPatch => write!(f, "partial validation failed"),
            ApiError::NotFound(message) => write!(f, "not found: {}", message),
            ApiError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl ApiError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidPatch => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(errors) => json!({ "error": errors }),
            ApiError::InvalidPatch => json!({ "message": THE_MOVIE_WAS_NOT_FOUND }),
            ApiError::NotFound(message) => json!({ "message": message }),
            ApiError::Store(e) => {
                tracing::error!("store error: {e}");
                json!({ "message": "internal error" })
            }
        };
        (status, Json(body)).into_response()
    }
}

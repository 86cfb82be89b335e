//! Booking error types with HTTP status code mapping.
//!
//! [`BookingError`] is the central error type for the directory. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use std::fmt;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "venue not found: 7",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// The kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A venue row.
    Venue,
    /// An artist row.
    Artist,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Venue => "venue",
            Self::Artist => "artist",
        };
        f.write_str(name)
    }
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                   |
/// |-----------|-----------------|-------------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request               |
/// | 2000–2999 | Not Found       | 404 Not Found                 |
/// | 3000–3999 | Server / Store   | 409 / 500 / 503               |
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// The referenced record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Which table was queried.
        entity: EntityKind,
        /// The missing primary key.
        id: i64,
    },

    /// A submitted form failed validation, or a show referenced a missing
    /// venue or artist.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The store rejected a write because of a constraint.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Any other persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),
}

impl BookingError {
    /// Shorthand for a missing venue.
    #[must_use]
    pub const fn venue_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: EntityKind::Venue,
            id,
        }
    }

    /// Shorthand for a missing artist.
    #[must_use]
    pub const fn artist_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: EntityKind::Artist,
            id,
        }
    }

    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::NotFound { .. } => 2001,
            Self::PersistenceError(_) => 3001,
            Self::ConstraintViolation(_) => 3002,
            Self::StoreUnavailable(_) => 3003,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ConstraintViolation(_) => StatusCode::CONFLICT,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::PersistenceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for BookingError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match err {
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::ConstraintViolation(db.message().to_string()),
                _ => Self::PersistenceError(db.message().to_string()),
            },
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::StoreUnavailable(err.to_string()),
            other => Self::PersistenceError(other.to_string()),
        }
    }
}

impl From<JsonRejection> for BookingError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<axum_extra::extract::FormRejection> for BookingError {
    fn from(rejection: axum_extra::extract::FormRejection) -> Self {
        Self::Validation(rejection.to_string())
    }
}

impl From<PathRejection> for BookingError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

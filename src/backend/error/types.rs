/**
 * Backend Error Types
 *
 * This module defines the error taxonomy used by the HTTP handlers. Each
 * variant maps to a status code and a JSON body; most client-facing errors
 * are field-keyed maps (e.g. `{"email": "Email already exists"}`) so forms
 * can attach messages to the offending input.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::validation::ValidationErrors;

/// API error type
///
/// Every handler returns `Result<_, ApiError>`. Infrastructure failures
/// (store, hashing, token signing) convert in via `From` and are degraded to
/// generic responses; the remaining variants carry the field key and message
/// the API promises.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input validation failed; the map itself becomes the 400 body
    #[error("validation failed")]
    Validation(ValidationErrors),

    /// A resource is missing
    #[error("{message}")]
    NotFound {
        field: &'static str,
        message: String,
    },

    /// A uniqueness or state conflict. The status varies by route (duplicate
    /// email replies 404, duplicate handle/like reply 400), preserving the
    /// original API's convention.
    #[error("{message}")]
    Conflict {
        status: StatusCode,
        field: &'static str,
        message: String,
    },

    /// Missing, malformed, or expired bearer token
    #[error("unauthorized")]
    Unauthorized,

    /// Authenticated, but not allowed to touch this resource
    #[error("{message}")]
    Forbidden { message: String },

    /// Store failure. Degraded to a 404 with a generic body; the real error
    /// is logged and never surfaced.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error(transparent)]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token signing failure (verification failures map to `Unauthorized`
    /// in the middleware instead)
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a 404 with a field-keyed body
    pub fn not_found(field: &'static str, message: impl Into<String>) -> Self {
        Self::NotFound {
            field,
            message: message.into(),
        }
    }

    /// Create a conflict with the status code the route calls for
    pub fn conflict(
        status: StatusCode,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Conflict {
            status,
            field,
            message: message.into(),
        }
    }

    /// Create a 403 with the `notauthorized` body
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { status, .. } => *status,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            // Store failures degrade to 404 rather than exposing detail
            Self::Database(_) => StatusCode::NOT_FOUND,
            Self::PasswordHash(_) | Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

//! REST API error types
//!
//! Every failure leaves the server as `{"error": "<message>", "code": "<CODE>"}`
//! with the matching status. Store and signing internals stay in the server log.

use folio_auth::AuthError;
use folio_core::CoreError;
use folio_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: &'static str,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Unique constraint violation (400)
    #[error("Duplicate key: {message} {location}")]
    DuplicateKey {
        message: String,
        field: String,
        location: ErrorLocation,
    },

    /// No identity matches email + password (401)
    #[error("Invalid credentials: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    /// Asserted role contradicts the stored one (401)
    #[error("Role mismatch: {message} {location}")]
    RoleMismatch {
        message: String,
        location: ErrorLocation,
    },

    /// Missing, invalid or expired token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::DuplicateKey { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials { .. }
            | ApiError::RoleMismatch { .. }
            | ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::DuplicateKey { .. } => "DUPLICATE_KEY",
            ApiError::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            ApiError::RoleMismatch { .. } => "ROLE_MISMATCH",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Forbidden { .. } => "FORBIDDEN",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (message, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::DuplicateKey { message, field, .. } => (message, Some(field)),
            ApiError::InvalidCredentials { message, .. }
            | ApiError::RoleMismatch { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        (
            status,
            Json(ApiErrorResponse {
                error: message,
                code,
                field,
            }),
        )
            .into_response()
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: Some("id".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert malformed request bodies to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidRole { .. } => ApiError::Validation {
                message: "Invalid role".to_string(),
                field: Some("role".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert auth errors to API errors
///
/// Token failures are not told apart: a forged, expired or truncated token
/// all produce the same "Invalid token" response.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::MissingField { field, .. } => ApiError::Validation {
                message: "Email and password are required".to_string(),
                field: Some(field.to_string()),
                location,
            },
            AuthError::InvalidCredentials { .. } => ApiError::InvalidCredentials {
                message: "Invalid email or password".to_string(),
                location,
            },
            AuthError::RoleMismatch { stored, .. } => ApiError::RoleMismatch {
                message: format!("Invalid role. This account is registered as {}", stored),
                location,
            },
            AuthError::MissingToken { .. } => ApiError::Unauthorized {
                message: "No token provided".to_string(),
                location,
            },
            AuthError::Forbidden { message, .. } => ApiError::Forbidden { message, location },
            e if e.is_token_failure() => {
                log::debug!("Token rejected: {}", e);
                ApiError::Unauthorized {
                    message: "Invalid token".to_string(),
                    location,
                }
            }
            e => {
                log::error!("Auth failure: {}", e);
                ApiError::Internal {
                    message: "Internal server error".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::DuplicateKey { message, field, .. } => ApiError::DuplicateKey {
                message,
                field,
                location,
            },
            DbError::Validation { source, .. } => ApiError::from(source),
            e => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", e);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

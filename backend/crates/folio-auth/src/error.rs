use folio_core::Role;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing required field '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Invalid role. This account is registered as {stored} {location}")]
    RoleMismatch {
        stored: Role,
        location: ErrorLocation,
    },

    #[error("No token provided {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("JWT secret is not configured {location}")]
    MissingSecret { location: ErrorLocation },

    #[error("JWT secret must be at least {min_length} characters {location}")]
    WeakSecret {
        min_length: usize,
        location: ErrorLocation,
    },

    #[error("Credential store failure: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// True for every failure that means "the presented token cannot be trusted".
    ///
    /// Callers must not tell these apart in responses.
    pub fn is_token_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingToken { .. }
                | Self::InvalidToken { .. }
                | Self::TokenExpired { .. }
                | Self::JwtDecode { .. }
                | Self::InvalidClaim { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

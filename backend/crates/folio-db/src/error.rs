use folio_auth::AuthError;
use folio_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Duplicate key: {message} {location}")]
    DuplicateKey {
        message: String,
        field: String,
        location: ErrorLocation,
    },

    #[error("Invalid input: {source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {source} {location}")]
    Hashing {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for DbError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Hashing {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;

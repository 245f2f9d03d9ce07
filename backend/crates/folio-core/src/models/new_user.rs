//! Registration input and the checks it must pass before anything is hashed.

use crate::{CoreError, Result as CoreErrorResult, Role};

use std::panic::Location;
use std::sync::LazyLock;

use error_location::ErrorLocation;
use regex::Regex;

/// Shortest password accepted at registration or password change
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Loose shape: something, `@`, something, `.`, something
static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r".+@.+\..+").ok());

/// Everything needed to create an identity
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl NewUser {
    /// Build registration input; name and email are trimmed, password is kept verbatim
    pub fn new(name: &str, email: &str, password: &str, role: Role) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            role,
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::Validation {
                message: "Name is required".to_string(),
                field: Some("name".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.email.is_empty() {
            return Err(CoreError::Validation {
                message: "Email is required".to_string(),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !is_valid_email(&self.email) {
            return Err(CoreError::Validation {
                message: "Please fill a valid email address".to_string(),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        validate_password(&self.password)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(email))
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    if password.is_empty() {
        return Err(CoreError::Validation {
            message: "Password is required".to_string(),
            field: Some("password".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation {
            message: format!(
                "Password must be at least {} characters.",
                MIN_PASSWORD_LENGTH
            ),
            field: Some("password".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

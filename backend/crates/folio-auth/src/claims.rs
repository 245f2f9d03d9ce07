use crate::{AuthError, Result as AuthErrorResult};

use folio_core::{Role, User};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token payload: who signed in, with which role, and for how long
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    pub fn for_user(user: &User, issued_at: i64, ttl_secs: i64) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: issued_at,
            exp: issued_at + ttl_secs,
        }
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.id.is_nil() {
            return Err(AuthError::InvalidClaim {
                claim: "id".to_string(),
                message: "id cannot be nil".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.email.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.exp <= self.iat {
            return Err(AuthError::InvalidClaim {
                claim: "exp".to_string(),
                message: "exp must be after iat".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

//! Per-request authorization state.
//!
//! An `AuthContext` only exists for a request whose token validated; the
//! role and ownership checks run against its claims and nothing else.

use crate::{AuthError, Claims, JwtValidator, Result as AuthErrorResult};

use folio_core::Role;

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AuthContext {
    claims: Claims,
}

impl AuthContext {
    pub fn new(claims: Claims) -> Self {
        Self { claims }
    }

    /// Require a valid token; `None` means the request carried no token at all
    #[track_caller]
    pub fn authenticate(validator: &JwtValidator, token: Option<&str>) -> AuthErrorResult<Self> {
        let token = token.ok_or_else(|| AuthError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        })?;

        validator.validate(token).map(Self::new)
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn user_id(&self) -> Uuid {
        self.claims.id
    }

    pub fn role(&self) -> Role {
        self.claims.role
    }

    #[track_caller]
    pub fn require_role(&self, role: Role) -> AuthErrorResult<()> {
        if self.claims.role == role {
            return Ok(());
        }

        Err(AuthError::Forbidden {
            message: format!("{} access required", capitalize(role.as_str())),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn require_owner_or_role(&self, owner_id: Uuid, role: Role) -> AuthErrorResult<()> {
        if self.claims.id == owner_id || self.claims.role == role {
            return Ok(());
        }

        Err(AuthError::Forbidden {
            message: "Access denied".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

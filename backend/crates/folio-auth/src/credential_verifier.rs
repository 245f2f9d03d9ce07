//! Sign-in: email + password (+ optional asserted role) to identity.

use crate::{AuthError, CredentialStore, Result as AuthErrorResult};

use folio_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use log::{info, warn};

pub struct CredentialVerifier<'a, S: CredentialStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: CredentialStore + ?Sized> CredentialVerifier<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve credentials to an identity.
    ///
    /// `expected_role` is the role the client claims to sign in as; a
    /// non-empty value that differs from the stored role is rejected even
    /// when the password is right.
    pub async fn verify(
        &self,
        email: &str,
        password: &str,
        expected_role: Option<&str>,
    ) -> AuthErrorResult<User> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingField {
                field: "email",
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if password.is_empty() {
            return Err(AuthError::MissingField {
                field: "password",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let Some(user) = self.store.find_by_credentials(email, password).await? else {
            warn!("Sign-in rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if let Some(role) = expected_role.filter(|r| !r.is_empty())
            && role != user.role.as_str()
        {
            warn!(
                "Sign-in rejected for user {}: asserted role '{}' but account is '{}'",
                user.id, role, user.role
            );
            return Err(AuthError::RoleMismatch {
                stored: user.role,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("User {} signed in as {}", user.id, user.role);
        Ok(user)
    }
}

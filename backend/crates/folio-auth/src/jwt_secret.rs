use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Shared HS256 signing secret.
///
/// There is no built-in fallback: a process without a configured secret
/// cannot construct one, so it cannot issue or accept tokens.
#[derive(Clone)]
pub struct JwtSecret(Vec<u8>);

impl JwtSecret {
    pub const MIN_LENGTH: usize = 32;

    #[track_caller]
    pub fn new(secret: Option<&str>) -> AuthErrorResult<Self> {
        let secret = secret
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AuthError::MissingSecret {
                location: ErrorLocation::from(Location::caller()),
            })?;

        if secret.len() < Self::MIN_LENGTH {
            return Err(AuthError::WeakSecret {
                min_length: Self::MIN_LENGTH,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(secret.as_bytes().to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JwtSecret(<redacted>)")
    }
}

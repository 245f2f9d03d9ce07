use crate::{AuthError, Claims, JwtSecret, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

const BEARER_PREFIX: &str = "Bearer ";

/// Verifies tokens minted by [`crate::TokenIssuer`] with the same secret
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn with_hs256(secret: &JwtSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // Expiry is exact: a token one second past `exp` is rejected.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Validate a token and return its claims.
    ///
    /// Accepts the bare token or the `Bearer `-prefixed header form.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token = strip_bearer(token);
        if token.is_empty() {
            return Err(AuthError::MissingToken {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}

/// Remove an optional `Bearer ` prefix and surrounding whitespace
pub fn strip_bearer(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .strip_prefix(BEARER_PREFIX)
        .unwrap_or(trimmed)
        .trim()
}

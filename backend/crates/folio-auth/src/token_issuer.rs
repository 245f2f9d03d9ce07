use crate::{AuthError, Claims, JwtSecret, Result as AuthErrorResult};

use folio_core::User;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Lifetime of a freshly issued token
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Mints HS256 tokens for signed-in users
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &JwtSecret, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `user`, valid from now until now + ttl
    #[track_caller]
    pub fn issue(&self, user: &User) -> AuthErrorResult<String> {
        self.issue_at(user, chrono::Utc::now().timestamp())
    }

    /// Issue a token as if it had been minted at `issued_at` (Unix seconds)
    #[track_caller]
    pub fn issue_at(&self, user: &User, issued_at: i64) -> AuthErrorResult<String> {
        let claims = Claims::for_user(user, issued_at, self.ttl.as_secs() as i64);

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|source| AuthError::JwtEncode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

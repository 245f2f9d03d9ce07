use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COOKIE_NAME, DEFAULT_TOKEN_TTL_DAYS,
    MAX_TOKEN_TTL_DAYS, MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_DAYS,
};

use std::time::Duration;

use serde::Deserialize;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; there is no built-in fallback.
    pub jwt_secret: Option<String>,
    pub token_ttl_days: u32,
    pub cookie_name: String,
    /// Add `Secure` to the session cookie (serve over HTTPS)
    pub cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            cookie_secure: false,
        }
    }
}

// Hand-written so the secret never ends up in a log line
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_days", &self.token_ttl_days)
            .field("cookie_name", &self.cookie_name)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().map(str::trim).unwrap_or_default();

        if secret.is_empty() {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (set it in config.toml or FOLIO_AUTH_JWT_SECRET)",
            ));
        }

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if !(MIN_TOKEN_TTL_DAYS..=MAX_TOKEN_TTL_DAYS).contains(&self.token_ttl_days) {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_days must be {}-{}, got {}",
                MIN_TOKEN_TTL_DAYS, MAX_TOKEN_TTL_DAYS, self.token_ttl_days
            )));
        }

        let valid_cookie_name = !self.cookie_name.is_empty()
            && self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid_cookie_name {
            return Err(ConfigError::auth(format!(
                "auth.cookie_name must be non-empty and use only [A-Za-z0-9_-], got '{}'",
                self.cookie_name
            )));
        }

        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(u64::from(self.token_ttl_days) * SECS_PER_DAY)
    }
}

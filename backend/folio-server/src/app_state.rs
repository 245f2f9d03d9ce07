use crate::error::Result as ServerErrorResult;

use folio_auth::{JwtSecret, JwtValidator, TokenIssuer};
use folio_config::{AuthConfig, Config};
use folio_db::UserRepository;

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Session cookie and token lifetime settings
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub cookie_name: String,
    pub cookie_secure: bool,
    pub token_ttl: Duration,
}

impl From<&AuthConfig> for AuthSettings {
    fn from(config: &AuthConfig) -> Self {
        Self {
            cookie_name: config.cookie_name.clone(),
            cookie_secure: config.cookie_secure,
            token_ttl: config.token_ttl(),
        }
    }
}

/// Shared per-request state; cloning is cheap
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub users: UserRepository,
    pub token_issuer: Arc<TokenIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub auth: AuthSettings,
}

impl AppState {
    pub fn new(pool: SqlitePool, secret: &JwtSecret, auth: AuthSettings) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            token_issuer: Arc::new(TokenIssuer::with_hs256(secret, auth.token_ttl)),
            jwt_validator: Arc::new(JwtValidator::with_hs256(secret)),
            pool,
            auth,
        }
    }

    /// Fails when no signing secret is configured
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let secret = JwtSecret::new(config.auth.jwt_secret.as_deref())?;
        Ok(Self::new(pool, &secret, AuthSettings::from(&config.auth)))
    }
}

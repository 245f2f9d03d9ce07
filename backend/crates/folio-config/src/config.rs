use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. FOLIO_CONFIG_DIR env var, else ./.folio/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. config.toml if it exists, else defaults
    /// 4. FOLIO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FOLIO_CONFIG_DIR env var > ./.folio/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;

        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log directory.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  cors origins: {}", self.server.cors_origins.join(", "));
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256 (secret {}), token ttl {}d, cookie '{}'{}",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.token_ttl_days,
            self.auth.cookie_name,
            if self.auth.cookie_secure {
                " (secure)"
            } else {
                ""
            }
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FOLIO_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FOLIO_SERVER_PORT", &mut self.server.port);
        Self::apply_env_list("FOLIO_SERVER_CORS_ORIGINS", &mut self.server.cors_origins);

        // Database
        Self::apply_env_string("FOLIO_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("FOLIO_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("FOLIO_AUTH_TOKEN_TTL_DAYS", &mut self.auth.token_ttl_days);
        Self::apply_env_string("FOLIO_AUTH_COOKIE_NAME", &mut self.auth.cookie_name);
        Self::apply_env_bool("FOLIO_AUTH_COOKIE_SECURE", &mut self.auth.cookie_secure);

        // Logging
        Self::apply_env_parse("FOLIO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FOLIO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FOLIO_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("FOLIO_LOG_DIR", &mut self.logging.dir);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply comma-separated environment variable override for lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}

mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".folio";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://localhost:5174",
    "http://localhost:3000",
];

const DEFAULT_DATABASE_FILENAME: &str = "folio.db";

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_DAYS: u32 = 7;
const MIN_TOKEN_TTL_DAYS: u32 = 1;
const MAX_TOKEN_TTL_DAYS: u32 = 365;
const DEFAULT_COOKIE_NAME: &str = "t";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] folio_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] folio_auth::AuthError),

    #[error("Invalid input: {0}")]
    Core(#[from] folio_core::CoreError),

    #[error("Database error: {0}")]
    Database(#[from] folio_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;

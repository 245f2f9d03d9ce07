mod auth;
mod error;
mod extractors;

pub mod auth_context;
pub mod claims;
pub mod credential_store;
pub mod credential_verifier;
pub mod error;
pub mod jwt_secret;
pub mod jwt_validator;
pub mod password_hasher;
pub mod token_issuer;

pub use auth_context::AuthContext;
pub use claims::Claims;
pub use credential_store::CredentialStore;
pub use credential_verifier::CredentialVerifier;
pub use error::{AuthError, Result};
pub use jwt_secret::JwtSecret;
pub use jwt_validator::JwtValidator;
pub use password_hasher::{PasswordDigest, PasswordHasher, Salt};
pub use token_issuer::{DEFAULT_TOKEN_TTL, TokenIssuer};

#[cfg(test)]
mod tests;

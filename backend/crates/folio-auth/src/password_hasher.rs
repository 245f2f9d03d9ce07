//! Salted one-way password transform.
//!
//! Digests are Argon2id outputs (default parameters) stored as unpadded B64
//! next to a per-user salt. The same plaintext and salt always produce the
//! same digest; comparison goes through [`Output`]'s constant-time equality.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::{Output, PasswordHasher as _, SaltString, rand_core::OsRng};
use error_location::ErrorLocation;

/// Per-user random salt, B64 encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salt(SaltString);

impl Salt {
    /// Rebuild a salt previously produced by [`PasswordHasher::make_salt`]
    #[track_caller]
    pub fn from_stored(value: &str) -> AuthErrorResult<Self> {
        SaltString::from_b64(value)
            .map(Self)
            .map_err(|e| AuthError::PasswordHash {
                message: format!("invalid stored salt: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Hash output, B64 encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh salt from the OS random source
    pub fn make_salt(&self) -> Salt {
        Salt(SaltString::generate(&mut OsRng))
    }

    #[track_caller]
    pub fn hash(&self, plaintext: &str, salt: &Salt) -> AuthErrorResult<PasswordDigest> {
        let output = self.output(plaintext, salt)?;
        Ok(PasswordDigest(output.to_string()))
    }

    /// Recompute the digest for `plaintext` and compare it with `digest`
    #[track_caller]
    pub fn verify(
        &self,
        plaintext: &str,
        salt: &Salt,
        digest: &PasswordDigest,
    ) -> AuthErrorResult<bool> {
        let expected = Output::b64_decode(digest.as_str()).map_err(|e| AuthError::PasswordHash {
            message: format!("invalid stored digest: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let actual = self.output(plaintext, salt)?;

        Ok(actual == expected)
    }

    /// Spend one hash computation and discard the result.
    ///
    /// Lookups for unknown emails call this so they take as long as a real
    /// password check.
    pub fn burn(&self, plaintext: &str) {
        let salt = self.make_salt();
        if let Err(e) = self.output(plaintext, &salt) {
            log::debug!("Dummy hash failed: {}", e);
        }
    }

    #[track_caller]
    fn output(&self, plaintext: &str, salt: &Salt) -> AuthErrorResult<Output> {
        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt.0)
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        hash.hash.ok_or_else(|| AuthError::PasswordHash {
            message: "argon2 produced no output".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

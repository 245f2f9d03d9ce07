//! Credential store: user rows with their salted password digests.
//!
//! ## Secrets stay here
//!
//! `password_hash` and `salt` are read into [`UserRow`] only long enough to
//! verify a password. Every public method returns [`User`], which has no
//! field for either.
//!
//! ## Uniqueness
//!
//! Email uniqueness comes from the `idx_users_email` unique index. There is no
//! "check then insert" step, so concurrent registrations for the same email
//! resolve to exactly one row and a `DuplicateKey` error for the rest.

use crate::{DbError, Result as DbErrorResult};

use folio_auth::{
    AuthError, CredentialStore, PasswordDigest, PasswordHasher, Result as AuthErrorResult, Salt,
};
use folio_core::{NewUser, Role, User, validate_password};

use std::panic::Location;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{error, info};
use sqlx::SqlitePool;
use uuid::Uuid;

const USER_COLUMNS: &str =
    "id, name, email, role, password_hash, salt, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: String,
    password_hash: String,
    salt: String,
    created_at: i64,
    updated_at: i64,
}

impl UserRow {
    #[track_caller]
    fn to_user(&self) -> DbErrorResult<User> {
        Ok(User {
            id: Uuid::parse_str(&self.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            name: self.name.clone(),
            email: self.email.clone(),
            role: Role::from_str(&self.role).map_err(|e| DbError::Initialization {
                message: format!("Invalid Role in users.role: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            created_at: timestamp(self.created_at, "users.created_at")?,
            updated_at: timestamp(self.updated_at, "users.updated_at")?,
        })
    }
}

#[track_caller]
fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn now() -> DbErrorResult<DateTime<Utc>> {
    // Storage keeps whole seconds; returned values match what a re-read yields.
    timestamp(Utc::now().timestamp(), "now")
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
    hasher: PasswordHasher,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_hasher(pool, PasswordHasher::new())
    }

    pub fn with_hasher(pool: SqlitePool, hasher: PasswordHasher) -> Self {
        Self { pool, hasher }
    }

    /// Validate, hash with a fresh salt, and insert a new identity
    pub async fn create(&self, new_user: &NewUser) -> DbErrorResult<User> {
        new_user.validate()?;

        let (salt, digest) = self.salt_and_hash(new_user.password.clone()).await?;

        let now = now()?;
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            role: new_user.role,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, name, email, role, password_hash, salt, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(digest.as_str())
        .bind(salt.as_str())
        .bind(now.timestamp())
        .bind(now.timestamp())
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        info!("Created user {} with role {}", user.id, user.role);
        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.to_user()).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        Ok(match self.find_row_by_email(email).await? {
            Some(row) => Some(row.to_user()?),
            None => None,
        })
    }

    /// All identities, oldest first
    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC, email ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(UserRow::to_user).collect()
    }

    /// The identity for `email`, only when `password` hashes to the stored digest.
    ///
    /// An unknown email still pays for one hash computation, so both failure
    /// paths take comparable time.
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> DbErrorResult<Option<User>> {
        let row = self.find_row_by_email(email).await?;

        let hasher = self.hasher.clone();
        let password = password.to_string();

        let Some(row) = row else {
            tokio::task::spawn_blocking(move || hasher.burn(&password))
                .await
                .map_err(join_error)?;
            return Ok(None);
        };

        let salt = Salt::from_stored(&row.salt)?;
        let digest = PasswordDigest::from_stored(row.password_hash.clone());

        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &salt, &digest))
            .await
            .map_err(join_error)??;

        if matches {
            Ok(Some(row.to_user()?))
        } else {
            Ok(None)
        }
    }

    /// Replace a user's password; a new salt is generated every time.
    ///
    /// Returns false when no user has `id`.
    pub async fn set_password(&self, id: Uuid, password: &str) -> DbErrorResult<bool> {
        validate_password(password)?;

        let (salt, digest) = self.salt_and_hash(password.to_string()).await?;

        let result = sqlx::query(
            "UPDATE users SET password_hash = ?, salt = ?, updated_at = ? WHERE id = ?",
        )
        .bind(digest.as_str())
        .bind(salt.as_str())
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        let updated = result.rows_affected() > 0;
        if updated {
            info!("Password changed for user {}", id);
        }
        Ok(updated)
    }

    async fn find_row_by_email(&self, email: &str) -> DbErrorResult<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn salt_and_hash(&self, password: String) -> DbErrorResult<(Salt, PasswordDigest)> {
        let hasher = self.hasher.clone();

        let (salt, digest) = tokio::task::spawn_blocking(move || {
            let salt = hasher.make_salt();
            hasher.hash(&password, &salt).map(|digest| (salt, digest))
        })
        .await
        .map_err(join_error)??;

        Ok((salt, digest))
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<Option<User>> {
        UserRepository::find_by_credentials(self, email, password)
            .await
            .map_err(|e| {
                error!("Credential lookup failed: {}", e);
                AuthError::Store {
                    message: "credential lookup failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })
    }
}

#[track_caller]
fn map_insert_error(e: sqlx::Error) -> DbError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => DbError::DuplicateKey {
            message: "Email already exists".to_string(),
            field: "email".to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
        _ => DbError::from(e),
    }
}

#[track_caller]
fn join_error(e: tokio::task::JoinError) -> DbError {
    DbError::Hashing {
        source: AuthError::PasswordHash {
            message: format!("hashing task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        },
        location: ErrorLocation::from(Location::caller()),
    }
}

use crate::Result as AuthErrorResult;

use folio_core::User;

use async_trait::async_trait;

/// Lookup side of the credential store, as the sign-in flow needs it
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// The identity registered under `email`, only if `password` matches
    async fn find_by_credentials(&self, email: &str, password: &str)
    -> AuthErrorResult<Option<User>>;
}

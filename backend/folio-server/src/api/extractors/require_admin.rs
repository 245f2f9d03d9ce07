use crate::{ApiError, AppState, CurrentUser};

use folio_auth::AuthContext;
use folio_core::Role;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// An authenticated caller whose token carries the admin role (403 otherwise)
pub struct RequireAdmin(pub AuthContext);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let CurrentUser(context) = CurrentUser::from_request_parts(parts, state).await?;

            context.require_role(Role::Admin).map_err(|e| {
                log::warn!(
                    "User {} denied admin route {}",
                    context.user_id(),
                    parts.uri.path()
                );
                ApiError::from(e)
            })?;

            Ok(RequireAdmin(context))
        }
    }
}

//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use folio_auth::AuthContext;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{
        HeaderMap,
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
    },
};

/// The authenticated caller.
///
/// Reads the token from the `Authorization` header (bare or `Bearer `), falling
/// back to the session cookie. The header wins when both are present. A
/// request without a valid token is rejected with 401 before the handler runs.
pub struct CurrentUser(pub AuthContext);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = extract_token(&parts.headers, &state.auth.cookie_name);

            match AuthContext::authenticate(&state.jwt_validator, token.as_deref()) {
                Ok(context) => {
                    log::debug!("Authenticated user {}", context.user_id());
                    Ok(CurrentUser(context))
                }
                Err(e) => {
                    log::warn!("Rejected request to {}: {}", parts.uri.path(), e);
                    Err(ApiError::from(e))
                }
            }
        }
    }
}

/// Token from the `Authorization` header, else from the named cookie
pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        let value = value.trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    extract_cookie(headers, cookie_name)
}

fn extract_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == cookie_name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

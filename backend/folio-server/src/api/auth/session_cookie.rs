//! `Set-Cookie` values for the session token.

use crate::AuthSettings;

use axum::http::{HeaderValue, header::InvalidHeaderValue};

/// `HttpOnly` cookie carrying the token, living as long as the token does
pub fn session_cookie(
    settings: &AuthSettings,
    token: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        settings.cookie_name,
        token,
        settings.token_ttl.as_secs()
    );
    if settings.cookie_secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Expire the session cookie immediately
pub fn clear_session_cookie(settings: &AuthSettings) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        settings.cookie_name
    );
    if settings.cookie_secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

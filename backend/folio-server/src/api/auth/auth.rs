//! Authentication REST API handlers
//!
//! Registration, sign-in/out and the "who am I" probe. Sign-in and signup
//! answer with the token in the body and in the session cookie.

use crate::{
    ApiError, ApiResult, AppState, AuthResponse, CurrentUser, CurrentUserResponse,
    MessageResponse, RegisterRequest, RegisterResponse, SigninRequest, UserDto, clear_session_cookie,
    session_cookie,
};

use folio_auth::CredentialVerifier;
use folio_core::User;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
};
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/auth/register
///
/// Create an account without signing in
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(request) = payload?;
    let user = create_user(&state, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Account created successfully. Please sign in.".to_string(),
            user: user.into(),
        }),
    ))
}

/// POST /api/auth/signup
///
/// Create an account and sign in immediately
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, HeaderMap, Json<AuthResponse>)> {
    let Json(request) = payload?;
    let user = create_user(&state, request).await?;
    let (headers, body) = start_session(&state, user)?;

    Ok((StatusCode::CREATED, headers, Json(body)))
}

/// POST /api/auth/signin
pub async fn signin(
    State(state): State<AppState>,
    payload: Result<Json<SigninRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, HeaderMap, Json<AuthResponse>)> {
    let Json(request) = payload?;

    let user = CredentialVerifier::new(&state.users)
        .verify(&request.email, &request.password, request.role.as_deref())
        .await?;

    let (headers, body) = start_session(&state, user)?;

    Ok((StatusCode::OK, headers, Json(body)))
}

/// GET /api/auth/signout
///
/// Clears the session cookie. The token itself stays valid until it expires.
pub async fn signout(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, HeaderMap, Json<MessageResponse>)> {
    let mut headers = HeaderMap::new();
    let cookie = clear_session_cookie(&state.auth)
        .map_err(|e| ApiError::internal(format!("Failed to build cookie: {}", e)))?;
    headers.insert(SET_COOKIE, cookie);

    Ok((
        StatusCode::OK,
        headers,
        Json(MessageResponse::new("Successfully signed out")),
    ))
}

/// GET /api/auth/user
///
/// Claims of the token presented with the request
pub async fn current_user(CurrentUser(context): CurrentUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        user: context.claims().clone(),
    })
}

// =============================================================================
// Helpers
// =============================================================================

async fn create_user(state: &AppState, request: RegisterRequest) -> ApiResult<User> {
    let new_user = request.into_new_user()?;
    let user = state.users.create(&new_user).await?;

    info!("Registered user {} ({})", user.id, user.role);
    Ok(user)
}

fn start_session(state: &AppState, user: User) -> ApiResult<(HeaderMap, AuthResponse)> {
    let token = state.token_issuer.issue(&user)?;

    let mut headers = HeaderMap::new();
    let cookie = session_cookie(&state.auth, &token)
        .map_err(|e| ApiError::internal(format!("Failed to build cookie: {}", e)))?;
    headers.insert(SET_COOKIE, cookie);

    Ok((
        headers,
        AuthResponse {
            token,
            user: UserDto::from(user),
        },
    ))
}

//! User REST API handlers
//!
//! Listing is admin only. Reading a user or changing their password is open
//! to that user and to admins.

use crate::{
    ApiError, ApiResult, AppState, ChangePasswordRequest, CurrentUser, MessageResponse,
    RequireAdmin, UserDto, UserListResponse, UserResponse,
};

use folio_core::Role;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use log::info;
use uuid::Uuid;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> ApiResult<Json<UserListResponse>> {
    let users = state.users.find_all().await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    CurrentUser(context): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;
    context.require_owner_or_role(user_id, Role::Admin)?;

    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/users/{id}/password
///
/// Sets a new password; the stored salt is replaced as well
pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(context): CurrentUser,
    Path(id): Path<String>,
    payload: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let user_id = Uuid::parse_str(&id)?;
    context.require_owner_or_role(user_id, Role::Admin)?;

    let Json(request) = payload?;
    if request.password.is_empty() || request.password_confirm.is_empty() {
        return Err(ApiError::validation("All fields are required", None));
    }
    if request.password != request.password_confirm {
        return Err(ApiError::validation(
            "Passwords do not match",
            Some("passwordConfirm"),
        ));
    }

    if !state.users.set_password(user_id, &request.password).await? {
        return Err(ApiError::not_found(format!("User {} not found", id)));
    }

    info!("User {} changed the password of {}", context.user_id(), user_id);
    Ok(Json(MessageResponse::new("Password updated successfully")))
}

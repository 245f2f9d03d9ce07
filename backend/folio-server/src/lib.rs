pub mod api;
pub mod app_state;
pub mod cli;
pub mod commands;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{current_user, register, signin, signout, signup},
        auth_response::AuthResponse,
        current_user_response::CurrentUserResponse,
        register_request::RegisterRequest,
        register_response::RegisterResponse,
        session_cookie::{clear_session_cookie, session_cookie},
        signin_request::SigninRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{current_user::CurrentUser, require_admin::RequireAdmin},
    message_response::MessageResponse,
    user_dto::UserDto,
    users::{
        change_password_request::ChangePasswordRequest,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{change_password, get_user, list_users},
    },
};
pub use app_state::{AppState, AuthSettings};

pub use crate::routes::build_router;

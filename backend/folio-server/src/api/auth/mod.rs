pub mod auth;
pub mod auth_response;
pub mod current_user_response;
pub mod register_request;
pub mod register_response;
pub mod session_cookie;
pub mod signin_request;

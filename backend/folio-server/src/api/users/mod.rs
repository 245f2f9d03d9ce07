pub mod change_password_request;
pub mod user_list_response;
pub mod user_response;
pub mod users;

pub mod current_user;
pub mod require_admin;

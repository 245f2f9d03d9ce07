pub mod new_user;
pub mod role;
pub mod user;

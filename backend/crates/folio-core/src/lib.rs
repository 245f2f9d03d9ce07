pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::new_user::{MIN_PASSWORD_LENGTH, NewUser, is_valid_email, validate_password};
pub use models::role::Role;
pub use models::user::User;

#[cfg(test)]
mod tests;

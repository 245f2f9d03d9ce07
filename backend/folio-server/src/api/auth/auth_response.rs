use crate::UserDto;

use serde::Serialize;

/// Token plus public user fields, returned by `signup` and `signin`
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

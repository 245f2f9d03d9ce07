use crate::UserDto;

use serde::Serialize;

/// 201 body of `register`: the account exists, sign in separately
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserDto,
}

use folio_core::{Role, User};

use serde::Serialize;
use uuid::Uuid;

/// Public user fields; credentials never leave the store
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
        }
    }
}

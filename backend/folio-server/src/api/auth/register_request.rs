use crate::{ApiError, ApiResult};

use folio_core::{NewUser, Role};

use std::str::FromStr;

use serde::Deserialize;

/// Body of `POST /api/auth/register` and `POST /api/auth/signup`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,

    /// "user" (default) or "admin"
    pub role: Option<String>,
}

impl RegisterRequest {
    /// Check presence, confirmation and role; field formats are checked on create
    #[track_caller]
    pub fn into_new_user(self) -> ApiResult<NewUser> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.password_confirm.is_empty()
        {
            return Err(ApiError::validation("All fields are required", None));
        }

        if self.password != self.password_confirm {
            return Err(ApiError::validation(
                "Passwords do not match",
                Some("passwordConfirm"),
            ));
        }

        // Only an absent role defaults; anything present must name a role exactly
        let role = match self.role.as_deref() {
            None => Role::default(),
            Some(value) => Role::from_str(value)?,
        };

        Ok(NewUser::new(&self.name, &self.email, &self.password, role))
    }
}

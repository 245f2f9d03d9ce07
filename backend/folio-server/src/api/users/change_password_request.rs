use serde::Deserialize;

/// Body of `PUT /api/users/{id}/password`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub password: String,
    pub password_confirm: String,
}

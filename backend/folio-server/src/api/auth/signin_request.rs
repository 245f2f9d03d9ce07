use serde::Deserialize;

/// Body of `POST /api/auth/signin`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,

    /// Role the client expects the account to have
    pub role: Option<String>,
}

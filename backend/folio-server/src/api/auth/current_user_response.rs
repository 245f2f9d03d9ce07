use folio_auth::Claims;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: Claims,
}

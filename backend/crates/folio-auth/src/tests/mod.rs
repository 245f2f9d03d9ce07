
use folio_core::{Role, User};

use chrono::Utc;
use uuid::Uuid;

pub(crate) const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes!";

pub(crate) fn test_user(email: &str, role: Role) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: email.to_string(),
        role,
        created_at: now,
        updated_at: now,
    }
}

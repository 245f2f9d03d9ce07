use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("user").unwrap(), Role::User);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
}

#[test]
fn test_role_from_str_is_case_sensitive() {
    assert!(matches!(
        Role::from_str("Admin"),
        Err(CoreError::InvalidRole { .. })
    ));
    assert!(Role::from_str("superuser").is_err());
}

#[test]
fn test_role_default_is_user() {
    assert_eq!(Role::default(), Role::User);
}

#[test]
fn test_role_serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(
        serde_json::from_str::<Role>("\"user\"").unwrap(),
        Role::User
    );
    assert!(serde_json::from_str::<Role>("\"root\"").is_err());
}

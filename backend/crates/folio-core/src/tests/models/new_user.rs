use crate::{CoreError, NewUser, Role, is_valid_email};

use googletest::prelude::*;

fn valid() -> NewUser {
    NewUser::new("Alice", "a@x.com", "secret1", Role::User)
}

#[test]
fn given_valid_input_when_validated_then_ok() {
    assert_that!(valid().validate(), ok(anything()));
}

#[test]
fn given_padded_name_and_email_when_built_then_trimmed() {
    let user = NewUser::new("  Alice ", " a@x.com  ", " pw with spaces ", Role::Admin);

    assert_that!(user.name, eq("Alice"));
    assert_that!(user.email, eq("a@x.com"));
    assert_that!(user.password, eq(" pw with spaces "));
}

#[test]
fn given_blank_name_when_validated_then_name_field_error() {
    let user = NewUser::new("   ", "a@x.com", "secret1", Role::User);

    let err = user.validate().unwrap_err();

    assert_that!(err.field(), some(eq("name")));
}

#[test]
fn given_malformed_email_when_validated_then_email_field_error() {
    let user = NewUser::new("Alice", "not-an-email", "secret1", Role::User);

    let err = user.validate().unwrap_err();

    assert!(matches!(err, CoreError::Validation { .. }));
    assert_that!(err.field(), some(eq("email")));
}

#[test]
fn given_five_char_password_when_validated_then_rejected() {
    let user = NewUser::new("B", "b@x.com", "short", Role::User);

    let err = user.validate().unwrap_err();

    assert_that!(err.field(), some(eq("password")));
    assert_that!(err.to_string(), contains_substring("at least 6 characters"));
}

#[test]
fn given_six_char_password_when_validated_then_ok() {
    let user = NewUser::new("B", "b@x.com", "sixsix", Role::User);

    assert_that!(user.validate(), ok(anything()));
}

#[test]
fn test_email_shape() {
    assert!(is_valid_email("a@x.com"));
    assert!(is_valid_email("first.last@sub.example.org"));
    assert!(!is_valid_email("a@x"));
    assert!(!is_valid_email("@x.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn given_concurrent_callers_when_checking_email_then_shared_pattern_agrees() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                (
                    is_valid_email(&format!("user{i}@x.com")),
                    is_valid_email(&format!("user{i}@x")),
                )
            })
        })
        .collect();

    for handle in handles {
        assert_that!(handle.join().unwrap(), eq((true, false)));
    }
}

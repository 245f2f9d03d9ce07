use crate::{ApiError, RegisterRequest};

use folio_core::Role;

use googletest::prelude::*;

fn request(role: Option<&str>) -> RegisterRequest {
    RegisterRequest {
        name: " Ada ".to_string(),
        email: " ada@example.com ".to_string(),
        password: "secret1".to_string(),
        password_confirm: "secret1".to_string(),
        role: role.map(String::from),
    }
}

fn message_of(result: Result<folio_core::NewUser, ApiError>) -> String {
    match result {
        Err(ApiError::Validation { message, .. }) => message,
        other => panic!("expected Validation, got {:?}", other.map(|u| u.email)),
    }
}

#[test]
fn given_complete_request_without_role_when_converted_then_defaults_to_user() {
    let new_user = request(None).into_new_user().unwrap();

    assert_that!(new_user.role, eq(Role::User));
    assert_that!(new_user.name.as_str(), eq("Ada"));
    assert_that!(new_user.email.as_str(), eq("ada@example.com"));
}

#[test]
fn given_admin_role_when_converted_then_keeps_admin() {
    let new_user = request(Some("admin")).into_new_user().unwrap();

    assert_that!(new_user.role, eq(Role::Admin));
}

#[test]
fn given_blank_role_when_converted_then_invalid_role() {
    let message = message_of(request(Some("")).into_new_user());

    assert_that!(message.as_str(), eq("Invalid role"));
}

#[test]
fn given_padded_admin_role_when_converted_then_invalid_role() {
    let message = message_of(request(Some(" admin ")).into_new_user());

    assert_that!(message.as_str(), eq("Invalid role"));
}

#[test]
fn given_unknown_role_when_converted_then_invalid_role() {
    let message = message_of(request(Some("superuser")).into_new_user());

    assert_that!(message.as_str(), eq("Invalid role"));
}

#[test]
fn given_missing_confirmation_when_converted_then_all_fields_required() {
    let mut req = request(None);
    req.password_confirm = String::new();

    assert_that!(
        message_of(req.into_new_user()).as_str(),
        eq("All fields are required")
    );
}

#[test]
fn given_blank_name_when_converted_then_all_fields_required() {
    let mut req = request(None);
    req.name = "   ".to_string();

    assert_that!(
        message_of(req.into_new_user()).as_str(),
        eq("All fields are required")
    );
}

#[test]
fn given_mismatched_confirmation_when_converted_then_passwords_do_not_match() {
    let mut req = request(None);
    req.password_confirm = "secret2".to_string();

    assert_that!(
        message_of(req.into_new_user()).as_str(),
        eq("Passwords do not match")
    );
}

#[test]
fn given_camel_case_json_when_deserialized_then_password_confirm_is_read() {
    let req: RegisterRequest = serde_json::from_str(
        r#"{"name":"A","email":"a@x.com","password":"secret1","passwordConfirm":"secret1"}"#,
    )
    .unwrap();

    assert_that!(req.password_confirm.as_str(), eq("secret1"));
    assert_that!(req.role, none());
}

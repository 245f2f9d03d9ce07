use crate::ApiError;

use folio_auth::AuthError;
use folio_core::{CoreError, Role};
use folio_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("User not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "User not found");
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) =
        body_json(ApiError::validation("Passwords do not match", Some("passwordConfirm"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "passwordConfirm");
}

#[tokio::test]
async fn test_duplicate_key_from_db_returns_400_without_driver_text() {
    let error = ApiError::from(DbError::DuplicateKey {
        message: "Email already exists".to_string(),
        field: "email".to_string(),
        location: here(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Email already exists");
    assert_eq!(json["code"], "DUPLICATE_KEY");
}

#[tokio::test]
async fn test_sqlx_error_is_hidden_behind_generic_500() {
    let error = ApiError::from(DbError::from(sqlx::Error::PoolClosed));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Database operation failed");
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_role_mismatch_returns_401_naming_stored_role() {
    let error = ApiError::from(AuthError::RoleMismatch {
        stored: Role::User,
        location: here(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Invalid role. This account is registered as user");
    assert_eq!(json["code"], "ROLE_MISMATCH");
}

#[tokio::test]
async fn test_token_failures_share_one_message() {
    let expired = ApiError::from(AuthError::TokenExpired { location: here() });
    let bad_claim = ApiError::from(AuthError::InvalidClaim {
        claim: "id".to_string(),
        message: "nil".to_string(),
        location: here(),
    });

    let (expired_status, expired_json) = body_json(expired).await;
    let (claim_status, claim_json) = body_json(bad_claim).await;

    assert_eq!(expired_status, StatusCode::UNAUTHORIZED);
    assert_eq!(claim_status, StatusCode::UNAUTHORIZED);
    assert_eq!(expired_json, claim_json);
    assert_eq!(expired_json["error"], "Invalid token");
}

#[tokio::test]
async fn test_forbidden_keeps_guard_message() {
    let error = ApiError::from(AuthError::Forbidden {
        message: "Admin access required".to_string(),
        location: here(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Admin access required");
}

#[tokio::test]
async fn test_store_failure_becomes_internal_error() {
    let error = ApiError::from(AuthError::Store {
        message: "pool closed".to_string(),
        location: here(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
}

#[test]
fn test_invalid_role_converts_to_validation() {
    let error = ApiError::from(CoreError::InvalidRole {
        value: "root".to_string(),
        location: here(),
    });

    match error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Invalid role");
            assert_eq!(field.as_deref(), Some("role"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let error = ApiError::from(uuid_err);

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error.code(), "VALIDATION_ERROR");
}

#![allow(dead_code)]

//! Test infrastructure for folio-server API tests

use folio_auth::JwtSecret;
use folio_core::{NewUser, Role, User};
use folio_server::{AppState, AuthSettings, build_router};

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes!";
pub const TEST_PASSWORD: &str = "secret1";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    folio_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let secret = JwtSecret::new(Some(TEST_SECRET)).expect("valid test secret");

    AppState::new(
        pool,
        &secret,
        AuthSettings {
            cookie_name: "t".to_string(),
            cookie_secure: false,
            token_ttl: Duration::from_secs(7 * 24 * 60 * 60),
        },
    )
}

pub fn test_router(state: &AppState) -> Router {
    build_router(state.clone(), &["http://localhost:5173".to_string()])
}

/// Create a user straight through the repository
pub async fn create_test_user(state: &AppState, email: &str, role: Role) -> User {
    state
        .users
        .create(&NewUser::new("Test User", email, TEST_PASSWORD, role))
        .await
        .expect("Failed to create test user")
}

/// Sign in over HTTP and return the token
pub async fn sign_in(app: &Router, email: &str, password: &str) -> String {
    let response = send(
        app,
        json_request(
            "POST",
            "/api/auth/signin",
            serde_json::json!({ "email": email, "password": password }),
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "sign in failed: {}", response.json);

    response.json["token"]
        .as_str()
        .expect("token in sign-in response")
        .to_string()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

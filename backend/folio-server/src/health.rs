use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = if database_ready(&state).await {
        "operational"
    } else {
        "unavailable"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
        },
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe: the database answers a trivial query
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if database_ready(&state).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
    }
}

async fn database_ready(state: &AppState) -> bool {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            false
        }
    }
}

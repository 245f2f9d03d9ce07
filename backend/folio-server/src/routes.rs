use crate::{
    AppState, change_password, current_user, get_user, health, list_users, register, signin,
    signout, signup,
};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    let api = Router::new()
        // Auth endpoints
        .route("/auth/register", post(register))
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
        .route("/auth/signout", get(signout))
        .route("/auth/user", get(current_user))
        // User endpoints
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/password", put(change_password));

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api", api)
        // Add shared state
        .with_state(state)
        .layer(cors_layer(cors_origins))
}

/// Credentialed CORS for the configured browser origins
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

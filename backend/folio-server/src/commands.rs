use crate::{AppState, build_router, error::Result as ServerErrorResult};

use folio_config::Config;
use folio_core::{NewUser, Role};
use folio_db::UserRepository;

use std::str::FromStr;

use log::{error, info};
use tokio::net::TcpListener;

/// Open the database, build the router and serve until Ctrl+C
pub async fn serve(config: &Config) -> ServerErrorResult<()> {
    config.validate()?;

    let pool = folio_db::connect(&config.database_path()?).await?;
    info!("Database connection established");

    let app_state = AppState::from_config(pool.clone(), config)?;
    let app = build_router(app_state, &config.server.cors_origins);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

/// Insert a user through the credential store, bypassing HTTP.
///
/// Only the database section is validated; no token is signed, so no
/// `auth.jwt_secret` is needed.
pub async fn create_user(
    config: &Config,
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> ServerErrorResult<()> {
    config.database.validate()?;

    let role = Role::from_str(role)?;
    let pool = folio_db::connect(&config.database_path()?).await?;

    let user = UserRepository::new(pool.clone())
        .create(&NewUser::new(name, email, password, role))
        .await?;

    info!("Created {} account {} <{}>", user.role, user.id, user.email);
    pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}

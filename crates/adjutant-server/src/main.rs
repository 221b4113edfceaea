//! Gateway entry point.
//!
//! Loads settings from the environment, wires up the router, and serves.

use std::sync::Arc;

use adjutant_config::Settings;
use adjutant_server::{build_router, AppState};
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let settings = Settings::from_env()?;
    let addr = settings.server.addr();

    let state = Arc::new(AppState::new(settings));
    let app = build_router(state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

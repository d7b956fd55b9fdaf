//! Campground HTTP server binary.
//!
//! # Usage
//!
//! ```bash
//! # Run with the local (in-memory) repository (default)
//! cargo run --bin campground-server
//!
//! # Run with the MongoDB repository
//! MONGODB_URL=mongodb://localhost:27017 \
//!   cargo run --bin campground-server --features mongo-repo
//! ```
//!
//! # Environment Variables
//!
//! - `HOST` / `PORT`: bind address (default 0.0.0.0:8080)
//! - `RUST_LOG`: log filter (default info)
//! - `CORS_ORIGINS`: comma-separated gated-mode allow-list
//! - `MONGODB_URL` / `MONGODB_DB`: document store (mongo-repo feature)
//! - `AUTH_TOKENS`: static gate entries `token:user_id:username[:admin]`

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use campground_api::auth::StaticAuthGate;
use campground_api::config::ServerConfig;
use campground_api::db::{RepositoryFactory, RepositoryType};
use campground_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting campground server");

    let config = ServerConfig::from_env();

    let repository_type = RepositoryType::from_env();
    let repository = RepositoryFactory::create(repository_type)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    info!(?repository_type, "repository initialized");

    let auth = Arc::new(StaticAuthGate::from_env());
    let state = AppState::new(repository, auth);
    let app = create_router(state, config.cors_origins.clone());

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

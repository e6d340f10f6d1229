//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, state wiring, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::store::RedisStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Connects to Redis first and refuses to start when the store is
/// unreachable; a transient mid-run outage surfaces per request instead.
///
/// # Errors
///
/// Returns an error if:
/// - The Redis connection or PING fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = RedisStore::connect(&config.redis_url)
        .await
        .context("Store unreachable at startup")?;

    let state = AppState::new(Arc::new(store), &config);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}

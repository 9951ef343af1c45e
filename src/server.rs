//! HTTP server initialization and runtime setup.
//!
//! Builds the redirect chain from the configured sources, then runs the Axum
//! server until a shutdown signal arrives.

use crate::application::ChainBuilder;
use crate::config::Config;
use crate::domain::{Handler, Passthrough, SourceError};
use crate::infrastructure::sources::{FileRoutes, RedisRouteStore, StaticRoutes};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Builds the redirect chain described by `config`.
///
/// Layers, innermost first: static routes, YAML file, JSON file, Redis
/// bucket. Unconfigured sources are skipped.
///
/// # Errors
///
/// Returns the [`SourceError`] of the first source that cannot be read or
/// parsed; no chain is built in that case.
pub async fn build_redirects(config: &Config) -> Result<Arc<dyn Handler>, SourceError> {
    let mut builder = ChainBuilder::new().layer(
        config
            .static_routes
            .iter()
            .map(|(path, url)| (path.clone(), url.clone()))
            .collect::<StaticRoutes>(),
    );

    if let Some(ref path) = config.yaml_path {
        info!("Reading additional routes from {}", path.display());
        builder = builder.layer(FileRoutes::yaml(path));
    }

    if let Some(ref path) = config.json_path {
        info!("Reading additional routes from {}", path.display());
        builder = builder.layer(FileRoutes::json(path));
    }

    if let Some(ref redis_url) = config.redis_url {
        info!("Reading additional routes from Redis");
        builder = builder.layer(RedisRouteStore::new(redis_url, &config.redis_routes_key)?);
    }

    builder.build(Arc::new(Passthrough)).await
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redirect chain (all sources read before the listener is bound)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - A route source is unavailable or malformed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let redirects = build_redirects(&config)
        .await
        .context("Failed to build redirect chain")?;
    info!("Redirect chain ready");

    let state = AppState::new(redirects, config.default_body.as_str());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Waits for Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

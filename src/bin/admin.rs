//! CLI administration tool for url-redirector.
//!
//! Maintains the Redis route bucket read by the server at startup, without
//! editing route files or restarting anything but the server itself.
//!
//! # Usage
//!
//! ```bash
//! # Add or replace a route
//! cargo run --bin admin -- routes set /bolt-github https://github.com/boltdb/bolt
//!
//! # List all routes in the bucket
//! cargo run --bin admin -- routes list
//!
//! # Remove a route
//! cargo run --bin admin -- routes remove /bolt-github
//!
//! # Check Redis connection
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` or `REDIS_HOST` (required): Redis connection
//! - `REDIS_ROUTES_KEY` (optional): hash holding routes (default: `routes`)
//!
//! Changes take effect the next time the server builds its redirect chain.

use url_redirector::config;
use url_redirector::domain::EntrySource;
use url_redirector::infrastructure::sources::RedisRouteStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing url-redirector routes.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage routes in the Redis bucket
    Routes {
        #[command(subcommand)]
        action: RouteAction,
    },

    /// Check Redis connection
    Check,
}

/// Route management subcommands.
#[derive(Subcommand)]
enum RouteAction {
    /// Add or replace a route
    Set {
        /// Request path, e.g. "/docs"
        path: String,

        /// Redirect target URL
        url: String,
    },

    /// List all routes
    List,

    /// Remove a route
    Remove {
        /// Request path to remove
        path: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL or REDIS_HOST must be set")?;

    let store = RedisRouteStore::new(redis_url, &config.redis_routes_key)?;

    match cli.command {
        Commands::Routes { action } => handle_route_action(action, &store).await?,
        Commands::Check => check(&store).await?,
    }

    Ok(())
}

/// Dispatches route management commands.
async fn handle_route_action(action: RouteAction, store: &RedisRouteStore) -> Result<()> {
    match action {
        RouteAction::Set { path, url } => set_route(store, &path, &url).await,
        RouteAction::List => list_routes(store).await,
        RouteAction::Remove { path, yes } => remove_route(store, &path, yes).await,
    }
}

/// Stores a route, warning when the path does not look like a request path.
async fn set_route(store: &RedisRouteStore, path: &str, url: &str) -> Result<()> {
    if !path.starts_with('/') {
        println!(
            "{}",
            format!("⚠️  Path '{}' does not start with '/' and will never match", path).yellow()
        );
    }

    store.put(path, url).await?;

    println!("{} {} → {}", "✓ Saved".green().bold(), path.bright_white(), url);
    Ok(())
}

/// Prints every route in the bucket.
async fn list_routes(store: &RedisRouteStore) -> Result<()> {
    let entries = store.entries().await?;

    println!(
        "{}",
        format!("📋 Routes in '{}'", store.key()).bright_blue().bold()
    );
    println!();

    if entries.is_empty() {
        println!("{}", "No routes found".yellow());
        return Ok(());
    }

    let width = entries.iter().map(|e| e.path.len()).max().unwrap_or(0);
    for entry in &entries {
        println!(
            "  {:width$}  {}",
            entry.path.bright_white(),
            entry.target,
            width = width
        );
    }

    println!();
    println!("Total: {}", entries.len().to_string().bold());
    Ok(())
}

/// Removes a route after confirmation.
async fn remove_route(store: &RedisRouteStore, path: &str, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove route '{}'?", path))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    if store.remove(path).await? {
        println!("{} {}", "✓ Removed".green().bold(), path);
    } else {
        println!("{}", format!("Route '{}' not found", path).yellow());
    }

    Ok(())
}

/// Verifies that Redis is reachable.
async fn check(store: &RedisRouteStore) -> Result<()> {
    if store.health_check().await {
        println!("{}", "✓ Redis connection OK".green().bold());
        Ok(())
    } else {
        println!("{}", "✗ Redis connection failed".red().bold());
        anyhow::bail!("Redis is unreachable")
    }
}

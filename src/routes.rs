//! Top-level router configuration.
//!
//! # Route Structure
//!
//! There are no per-path routes: every request, whatever its method or path,
//! goes through the redirect middleware and, on a miss, reaches the default
//! handler registered as the router fallback.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging (outermost)
//! - **Redirect** - Chain lookup, `302 Found` on hit

use crate::api::handlers::default_handler;
use crate::api::middleware::{redirect, tracing};
use crate::state::AppState;
use axum::{Router, middleware};

/// Constructs the application router.
///
/// # Arguments
///
/// - `state` - redirect chain and default body shared by all requests
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .fallback(default_handler)
        .layer(middleware::from_fn_with_state(state.clone(), redirect::layer))
        .layer(tracing::layer())
        .with_state(state)
}

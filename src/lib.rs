//! # URL Redirector
//!
//! A layered path-to-URL redirect service built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Route entries, lookup tables, redirect handlers
//! - **Application Layer** ([`application`]) - Chain construction from route sources
//! - **Infrastructure Layer** ([`infrastructure`]) - YAML/JSON decoding, file and Redis sources
//! - **API Layer** ([`api`]) - Redirect middleware and the default handler
//!
//! ## How a request is served
//!
//! Route sources are folded into a chain of redirect handlers at startup. Each
//! source becomes one layer wrapping the previous one, so later sources take
//! priority. A request path is looked up from the outermost layer inward; the
//! first hit answers `302 Found`, and a full miss reaches the default handler.
//!
//! ## Quick Start
//!
//! ```bash
//! export ROUTES_YAML="routes.yml"   # Optional
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run -- --json routes.json
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::ChainBuilder;
    pub use crate::domain::entities::{Entry, LookupTable, build_lookup};
    pub use crate::domain::{
        EntrySource, Handler, Outcome, Passthrough, SourceError, make_handler,
    };
    pub use crate::infrastructure::format::Format;
    pub use crate::infrastructure::sources::{
        EncodedRoutes, FileRoutes, RedisRouteStore, StaticRoutes,
    };
    pub use crate::state::AppState;
}

//! Route source implementations.
//!
//! Every source implements [`crate::domain::source::EntrySource`]:
//! - [`StaticRoutes`] - Routes known from configuration
//! - [`EncodedRoutes`] - YAML or JSON document held in memory
//! - [`FileRoutes`] - YAML or JSON document read from disk
//! - [`RedisRouteStore`] - Redis hash scanned once at startup

mod encoded;
mod file;
mod redis_store;
mod static_routes;

pub use encoded::EncodedRoutes;
pub use file::FileRoutes;
pub use redis_store::RedisRouteStore;
pub use static_routes::StaticRoutes;

//! HTTP middleware wrapped around the default handler.
//!
//! Provides redirect resolution and request tracing.

pub mod redirect;
pub mod tracing;

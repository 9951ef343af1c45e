//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete route sources and the document formats they decode.
//!
//! # Modules
//!
//! - [`format`] - YAML and JSON route document decoding
//! - [`sources`] - Static, encoded, file and Redis route sources

pub mod format;
pub mod sources;

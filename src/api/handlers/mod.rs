//! HTTP request handlers.

pub mod default;

pub use default::default_handler;

//! Application layer orchestrating route loading.
//!
//! - [`chain_builder::ChainBuilder`] - Folds route sources into a redirect chain

pub mod chain_builder;

pub use chain_builder::ChainBuilder;

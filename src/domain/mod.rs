//! Domain layer containing the routing model.
//!
//! # Architecture
//!
//! - [`entities`] - Route entries and lookup tables
//! - [`handler`] - Redirect handlers and the fallback chain
//! - [`source`] - Route source trait implemented by the infrastructure layer
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - [`source::EntrySource`] defines the contract implemented by infrastructure
//! - Handlers are immutable once built and shared across requests via `Arc`

pub mod entities;
pub mod handler;
pub mod source;

pub use handler::{Handler, Outcome, Passthrough, RedirectHandler, make_handler};
pub use source::{EntrySource, SourceError};

#[cfg(test)]
pub use handler::MockHandler;
#[cfg(test)]
pub use source::MockEntrySource;

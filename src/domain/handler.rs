//! Redirect handlers and the fallback chain they form.
//!
//! A [`RedirectHandler`] owns one [`LookupTable`] and a link to exactly one
//! fallback [`Handler`]. Wrapping handlers around each other produces a
//! chain: the outermost (last-built) handler is consulted first and each miss
//! is forwarded one link inward, until a table hits or the terminal handler
//! answers.

use crate::domain::entities::LookupTable;
use std::sync::Arc;

/// Result of resolving a request path against a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Respond with `302 Found` pointing at the target URL.
    Redirect(String),
    /// No layer matched; the application default handler answers.
    Fallthrough,
}

/// Resolves a request path to an [`Outcome`].
///
/// Implementations must be free of per-request state so a single instance can
/// serve concurrent requests.
#[cfg_attr(test, mockall::automock)]
pub trait Handler: Send + Sync {
    fn handle(&self, path: &str) -> Outcome;
}

/// Terminal handler that never matches.
///
/// Sits at the bottom of every chain and hands the request over to the
/// application default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Handler for Passthrough {
    fn handle(&self, _path: &str) -> Outcome {
        Outcome::Fallthrough
    }
}

/// Handler that redirects paths found in its table and delegates the rest.
pub struct RedirectHandler {
    table: LookupTable,
    fallback: Arc<dyn Handler>,
}

impl RedirectHandler {
    /// Number of routes served directly by this layer.
    pub fn routes(&self) -> usize {
        self.table.len()
    }
}

impl Handler for RedirectHandler {
    fn handle(&self, path: &str) -> Outcome {
        match self.table.get(path) {
            Some(target) => Outcome::Redirect(target.to_string()),
            None => self.fallback.handle(path),
        }
    }
}

/// Wraps `fallback` with a layer that redirects every path in `table`.
///
/// The returned handler takes ownership of the table. The fallback is only
/// invoked for paths the table does not contain, with the path unchanged,
/// and its outcome is returned as-is.
pub fn make_handler(table: LookupTable, fallback: Arc<dyn Handler>) -> RedirectHandler {
    RedirectHandler { table, fallback }
}

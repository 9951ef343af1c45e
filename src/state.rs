//! Shared application state injected into handlers and middleware.

use crate::domain::Handler;
use std::sync::Arc;

/// Immutable state shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// Outermost handler of the redirect chain.
    pub redirects: Arc<dyn Handler>,
    /// Plain-text body served when no route matches.
    pub default_body: Arc<str>,
}

impl AppState {
    pub fn new(redirects: Arc<dyn Handler>, default_body: impl Into<Arc<str>>) -> Self {
        Self {
            redirects,
            default_body: default_body.into(),
        }
    }
}

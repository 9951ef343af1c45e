//! Handler chain construction from an ordered list of route sources.

use crate::domain::entities::build_lookup;
use crate::domain::handler::{Handler, make_handler};
use crate::domain::source::{EntrySource, SourceError};
use std::sync::Arc;
use tracing::{debug, info};

/// Builds a redirect chain by folding route sources over a terminal handler.
///
/// Sources are layered in the order they are added: each new layer wraps the
/// previous one, so a source added later shadows every earlier source and the
/// terminal handler.
///
/// # Example
///
/// ```rust,ignore
/// let redirects = ChainBuilder::new()
///     .layer(StaticRoutes::from_iter([("/docs", "https://example.com/docs")]))
///     .layer(FileRoutes::yaml("routes.yml"))
///     .build(Arc::new(Passthrough))
///     .await?;
/// ```
#[derive(Default)]
pub struct ChainBuilder {
    sources: Vec<Box<dyn EntrySource>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `source` as the new outermost layer.
    pub fn layer(self, source: impl EntrySource + 'static) -> Self {
        self.layer_boxed(Box::new(source))
    }

    /// Adds an already boxed source as the new outermost layer.
    pub fn layer_boxed(mut self, source: Box<dyn EntrySource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Number of layers added so far.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Reads every source in order and wraps `terminal` with one redirect
    /// layer per source.
    ///
    /// Sources are consumed, so any connection they hold is released before
    /// the chain is returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`SourceError`] raised by a source. Sources after
    /// the failing one are not read and no chain is returned.
    pub async fn build(self, terminal: Arc<dyn Handler>) -> Result<Arc<dyn Handler>, SourceError> {
        let mut handler = terminal;

        for source in self.sources {
            let name = source.name();
            debug!("Loading routes from {}", name);

            let table = build_lookup(source.entries().await?);
            info!("Loaded {} routes from {}", table.len(), name);

            handler = Arc::new(make_handler(table, handler));
        }

        Ok(handler)
    }
}

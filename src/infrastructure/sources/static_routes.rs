//! In-memory route source built from configuration.

use crate::domain::entities::Entry;
use crate::domain::source::{EntrySource, SourceError};
use async_trait::async_trait;

/// Fixed set of routes known before startup, typically `STATIC_ROUTES`.
#[derive(Debug, Clone, Default)]
pub struct StaticRoutes {
    entries: Vec<Entry>,
}

impl StaticRoutes {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl<P, T> FromIterator<(P, T)> for StaticRoutes
where
    P: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, T)>>(pairs: I) -> Self {
        Self::new(pairs.into_iter().map(Entry::from).collect())
    }
}

#[async_trait]
impl EntrySource for StaticRoutes {
    fn name(&self) -> String {
        "static routes".to_string()
    }

    async fn entries(&self) -> Result<Vec<Entry>, SourceError> {
        Ok(self.entries.clone())
    }
}

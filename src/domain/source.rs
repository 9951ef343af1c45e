//! Route source abstraction and its error type.

use crate::domain::entities::Entry;
use async_trait::async_trait;

/// Errors raised while reading entries from a route source.
///
/// Both variants are fatal at startup: the chain is never built from a
/// partially loaded set of sources.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Malformed routes in {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Routes source {source_name} is unavailable: {message}")]
    Unavailable {
        source_name: String,
        message: String,
    },
}

impl SourceError {
    pub fn parse(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    pub fn unavailable(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Unavailable {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    /// Name of the source that failed.
    pub fn source_name(&self) -> &str {
        match self {
            Self::Parse { source_name, .. } | Self::Unavailable { source_name, .. } => source_name,
        }
    }
}

/// Anything that can produce an ordered list of route entries.
///
/// Static maps, encoded YAML/JSON documents, files and the Redis route store
/// all sit behind this trait, so the chain builder treats them uniformly.
///
/// # Implementations
///
/// - [`crate::infrastructure::sources::StaticRoutes`] - In-memory map from configuration
/// - [`crate::infrastructure::sources::EncodedRoutes`] - YAML or JSON bytes
/// - [`crate::infrastructure::sources::FileRoutes`] - YAML or JSON file on disk
/// - [`crate::infrastructure::sources::RedisRouteStore`] - Redis hash bucket
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntrySource: Send + Sync {
    /// Human-readable name used in logs and errors.
    fn name(&self) -> String;

    /// Reads every entry of the source in source order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] if the underlying file or store
    /// cannot be read, and [`SourceError::Parse`] if its contents are malformed.
    async fn entries(&self) -> Result<Vec<Entry>, SourceError>;
}

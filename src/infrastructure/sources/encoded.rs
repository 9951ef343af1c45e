//! Route source over an in-memory YAML or JSON document.

use crate::domain::entities::Entry;
use crate::domain::source::{EntrySource, SourceError};
use crate::infrastructure::format::Format;
use async_trait::async_trait;

/// Raw route document bytes paired with their serialization.
#[derive(Debug, Clone)]
pub struct EncodedRoutes {
    name: String,
    format: Format,
    bytes: Vec<u8>,
}

impl EncodedRoutes {
    pub fn new(name: impl Into<String>, format: Format, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            format,
            bytes: bytes.into(),
        }
    }

    pub fn yaml(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new("inline YAML", Format::Yaml, bytes)
    }

    pub fn json(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new("inline JSON", Format::Json, bytes)
    }
}

#[async_trait]
impl EntrySource for EncodedRoutes {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn entries(&self) -> Result<Vec<Entry>, SourceError> {
        self.format
            .parse(&self.bytes)
            .map_err(|e| SourceError::parse(self.name(), e))
    }
}

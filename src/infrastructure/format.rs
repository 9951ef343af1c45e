//! Decoding of route lists from YAML and JSON documents.
//!
//! Both formats describe the same shape, a list of records:
//!
//! ```yaml
//! - path: /some-path
//!   url: https://www.some-url.com/demo
//! ```
//!
//! ```json
//! [{"path": "/some-path", "url": "https://www.some-url.com/demo"}]
//! ```
//!
//! Missing `path` or `url` fields decode as empty strings in both formats.
//! Extra fields are ignored.

use crate::domain::entities::Entry;
use std::fmt;

/// Errors that can occur while decoding a route document.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialization of a route document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Decodes `bytes` into entries, preserving document order.
    ///
    /// A blank or `null` document yields no entries in either format.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] on malformed syntax or when the document is not
    /// a list of records with string fields.
    pub fn parse(self, bytes: &[u8]) -> Result<Vec<Entry>, FormatError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let entries: Option<Vec<Entry>> = match self {
            Self::Yaml => serde_yaml::from_slice(bytes)?,
            Self::Json => serde_json::from_slice(bytes)?,
        };
        Ok(entries.unwrap_or_default())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

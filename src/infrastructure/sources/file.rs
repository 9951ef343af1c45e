//! Route source backed by a YAML or JSON file.

use crate::domain::entities::Entry;
use crate::domain::source::{EntrySource, SourceError};
use crate::infrastructure::format::Format;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Route file read in full when the chain is built.
#[derive(Debug, Clone)]
pub struct FileRoutes {
    path: PathBuf,
    format: Format,
}

impl FileRoutes {
    pub fn new(path: impl Into<PathBuf>, format: Format) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn yaml(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Format::Yaml)
    }

    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Format::Json)
    }
}

#[async_trait]
impl EntrySource for FileRoutes {
    fn name(&self) -> String {
        format!("{} file {}", self.format, self.path.display())
    }

    async fn entries(&self) -> Result<Vec<Entry>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::unavailable(self.name(), e))?;

        debug!("Read {} bytes from {}", bytes.len(), self.path.display());

        self.format
            .parse(&bytes)
            .map_err(|e| SourceError::parse(self.name(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_reads_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"path": "/json", "url": "https://example.com/json"}}]"#).unwrap();

        let source = FileRoutes::json(file.path());
        let entries = source.entries().await.unwrap();

        assert_eq!(entries, vec![Entry::new("/json", "https://example.com/json")]);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileRoutes::yaml(dir.path().join("absent.yml"));

        let err = source.entries().await.unwrap_err();

        assert!(matches!(err, SourceError::Unavailable { .. }));
        assert!(err.source_name().contains("absent.yml"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "- path: /a\n  url: {{broken").unwrap();

        let err = FileRoutes::yaml(file.path()).entries().await.unwrap_err();

        assert!(matches!(err, SourceError::Parse { .. }));
    }
}

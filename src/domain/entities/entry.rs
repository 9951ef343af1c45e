//! Route entry entity: one path-to-URL configuration record.

use serde::Deserialize;

/// A single `(path, url)` pair read from a route source.
///
/// Both fields fall back to an empty string when absent from the source
/// record. Targets are opaque and never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub path: String,
    #[serde(rename = "url")]
    pub target: String,
}

impl Entry {
    /// Creates a new Entry instance.
    pub fn new(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: target.into(),
        }
    }
}

impl<P, T> From<(P, T)> for Entry
where
    P: Into<String>,
    T: Into<String>,
{
    fn from((path, target): (P, T)) -> Self {
        Self::new(path, target)
    }
}

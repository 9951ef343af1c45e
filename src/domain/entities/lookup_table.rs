//! Path-to-URL lookup table built from one route source.

use super::entry::Entry;
use std::collections::HashMap;

/// Immutable mapping from request path to redirect target.
///
/// Keys are unique by construction. A table is built once per source and
/// never mutated afterwards, so it can be shared across request tasks
/// without synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    routes: HashMap<String, String>,
}

impl LookupTable {
    /// Returns the target URL mapped to `path`, if any.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.routes.get(path).map(String::as_str)
    }

    /// Returns true if `path` has a mapping in this table.
    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl FromIterator<Entry> for LookupTable {
    fn from_iter<I: IntoIterator<Item = Entry>>(entries: I) -> Self {
        let mut routes = HashMap::new();
        for entry in entries {
            routes.insert(entry.path, entry.target);
        }
        Self { routes }
    }
}

/// Builds a lookup table from entries in load order.
///
/// Each entry overwrites any earlier entry with the same path, so the last
/// occurrence of a path wins. Empty input yields an empty table.
pub fn build_lookup<I>(entries: I) -> LookupTable
where
    I: IntoIterator<Item = Entry>,
{
    entries.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_lookup_maps_every_path() {
        let table = build_lookup(vec![
            Entry::new("/a", "https://a.example.com"),
            Entry::new("/b", "https://b.example.com"),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("/a"), Some("https://a.example.com"));
        assert_eq!(table.get("/b"), Some("https://b.example.com"));
        assert_eq!(table.get("/c"), None);
    }

    #[test]
    fn test_build_lookup_last_duplicate_wins() {
        let table = build_lookup(vec![Entry::new("/a", "u1"), Entry::new("/a", "u2")]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("/a"), Some("u2"));
    }

    #[test]
    fn test_build_lookup_empty_input() {
        let table = build_lookup(Vec::new());

        assert!(table.is_empty());
        assert!(!table.contains("/"));
    }

    #[test]
    fn test_build_lookup_keeps_empty_path() {
        let table = build_lookup(vec![Entry::new("", "https://example.com")]);

        assert!(table.contains(""));
        assert!(!table.contains("/"));
    }
}

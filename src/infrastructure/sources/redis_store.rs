//! Redis-backed route store.
//!
//! Routes live in a single Redis hash (the "bucket"): each field is a request
//! path and its value the redirect target. The server scans the hash once at
//! startup and drops the connection before serving traffic; the `admin`
//! binary uses the same type to maintain the bucket.

use crate::domain::entities::Entry;
use crate::domain::source::{EntrySource, SourceError};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::collections::HashMap;
use tracing::{debug, info};

/// Route bucket stored as a Redis hash.
pub struct RedisRouteStore {
    client: Client,
    key: String,
}

impl RedisRouteStore {
    /// Creates a store for the hash at `key`.
    ///
    /// No connection is opened until the store is first used.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] if the URL is invalid.
    pub fn new(redis_url: &str, key: impl Into<String>) -> Result<Self, SourceError> {
        let key = key.into();
        let client = Client::open(redis_url).map_err(|e| {
            SourceError::unavailable(
                format!("Redis bucket {}", key),
                format!("Failed to create Redis client: {}", e),
            )
        })?;

        Ok(Self { client, key })
    }

    /// Name of the Redis hash holding the routes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Connects and validates the connection with a PING.
    async fn connect(&self) -> Result<ConnectionManager, SourceError> {
        let mut manager = ConnectionManager::new(self.client.clone())
            .await
            .map_err(|e| {
                SourceError::unavailable(self.name(), format!("Failed to connect to Redis: {}", e))
            })?;

        manager
            .ping::<()>()
            .await
            .map_err(|e| SourceError::unavailable(self.name(), format!("Redis PING failed: {}", e)))?;

        debug!("Connected to Redis for {}", self.name());
        Ok(manager)
    }

    /// Checks that the store is reachable.
    pub async fn health_check(&self) -> bool {
        self.connect().await.is_ok()
    }

    /// Stores or replaces the route for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] on connection or command failure.
    pub async fn put(&self, path: &str, target: &str) -> Result<(), SourceError> {
        let mut conn = self.connect().await?;

        conn.hset::<_, _, _, ()>(&self.key, path, target)
            .await
            .map_err(|e| SourceError::unavailable(self.name(), format!("Redis HSET failed: {}", e)))?;

        info!("Stored route {} -> {} in {}", path, target, self.key);
        Ok(())
    }

    /// Deletes the route for `path`, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] on connection or command failure.
    pub async fn remove(&self, path: &str) -> Result<bool, SourceError> {
        let mut conn = self.connect().await?;

        let removed: i64 = conn
            .hdel(&self.key, path)
            .await
            .map_err(|e| SourceError::unavailable(self.name(), format!("Redis HDEL failed: {}", e)))?;

        Ok(removed > 0)
    }
}

#[async_trait]
impl EntrySource for RedisRouteStore {
    fn name(&self) -> String {
        format!("Redis bucket {}", self.key)
    }

    /// Scans the whole hash with `HGETALL`.
    ///
    /// Entries are returned sorted by path. Fields and values must be valid
    /// UTF-8; anything else is reported as a parse error.
    async fn entries(&self) -> Result<Vec<Entry>, SourceError> {
        let mut conn = self.connect().await?;

        let raw: HashMap<Vec<u8>, Vec<u8>> = conn.hgetall(&self.key).await.map_err(|e| {
            SourceError::unavailable(self.name(), format!("Redis HGETALL failed: {}", e))
        })?;

        let mut entries = raw
            .into_iter()
            .map(|(path, target)| decode_pair(path, target))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SourceError::parse(self.name(), e))?;

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}

/// Decodes a raw hash field/value pair into an [`Entry`].
fn decode_pair(path: Vec<u8>, target: Vec<u8>) -> Result<Entry, String> {
    let path = String::from_utf8(path).map_err(|e| format!("path is not valid UTF-8: {}", e))?;
    let target = String::from_utf8(target)
        .map_err(|e| format!("target for {} is not valid UTF-8: {}", path, e))?;

    Ok(Entry::new(path, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pair() {
        let entry = decode_pair(
            b"/bolt-github".to_vec(),
            b"https://github.com/boltdb/bolt".to_vec(),
        )
        .unwrap();

        assert_eq!(entry, Entry::new("/bolt-github", "https://github.com/boltdb/bolt"));
    }

    #[test]
    fn test_decode_pair_rejects_invalid_utf8() {
        assert!(decode_pair(vec![0xff, 0xfe], b"https://a".to_vec()).is_err());

        let err = decode_pair(b"/a".to_vec(), vec![0xc3, 0x28]).unwrap_err();
        assert!(err.contains("/a"));
    }

    #[test]
    fn test_invalid_url_is_unavailable() {
        let err = RedisRouteStore::new("not-a-redis-url", "routes").err().unwrap();

        assert!(matches!(err, SourceError::Unavailable { .. }));
        assert_eq!(err.source_name(), "Redis bucket routes");
    }

    #[test]
    fn test_store_name_uses_key() {
        let store = RedisRouteStore::new("redis://127.0.0.1:6379/0", "my-routes").unwrap();

        assert_eq!(store.key(), "my-routes");
        assert_eq!(store.name(), "Redis bucket my-routes");
    }
}

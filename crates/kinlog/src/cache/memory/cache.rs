//! In-memory cache implementation with LRU eviction.
//!
//! Provides a thread-safe in-memory cache using tokio synchronization
//! primitives and an LRU eviction policy. Entries have no expiry; they stay
//! until deleted or evicted.

use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use kinlog_core::cache::{Cache, CacheError, Result};

/// In-memory cache implementation with LRU eviction.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
/// Uses LRU eviction to limit memory usage when max_entries is reached.
/// Clones share the same entries.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, Vec<u8>>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache with LRU eviction.
    ///
    /// # Arguments
    ///
    /// * `max_entries` - Maximum number of entries before LRU eviction kicks in.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::OperationFailed` if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_entries).ok_or_else(|| {
            CacheError::OperationFailed("max_entries must be greater than 0".to_string())
        })?;
        Ok(Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        })
    }

    /// Returns the number of cached entries.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        // Write lock: a hit updates the LRU order.
        let mut store = self.store.write().await;
        Ok(store.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.pop(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new(100).unwrap();

        cache.set("note:1", b"hello").await.unwrap();

        assert_eq!(cache.get("note:1").await.unwrap(), Some(b"hello".to_vec()));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = MemoryCache::new(100).unwrap();

        assert_eq!(cache.get("note:1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let cache = MemoryCache::new(100).unwrap();

        cache.set("note:1", b"old").await.unwrap();
        cache.set("note:1", b"new").await.unwrap();

        assert_eq!(cache.get("note:1").await.unwrap(), Some(b"new".to_vec()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = MemoryCache::new(100).unwrap();
        cache.set("note:1", b"hello").await.unwrap();

        cache.delete("note:1").await.unwrap();
        // Deleting again is not an error
        cache.delete("note:1").await.unwrap();

        assert_eq!(cache.get("note:1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let cache = MemoryCache::new(2).unwrap();

        cache.set("a", b"1").await.unwrap();
        cache.set("b", b"2").await.unwrap();
        // Touch "a" so "b" becomes least recently used
        cache.get("a").await.unwrap();
        cache.set("c", b"3").await.unwrap();

        assert!(cache.get("a").await.unwrap().is_some());
        assert!(cache.get("b").await.unwrap().is_none());
        assert!(cache.get("c").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = MemoryCache::new(10).unwrap();
        let clone = cache.clone();

        cache.set("skill:1", b"x").await.unwrap();

        assert_eq!(clone.get("skill:1").await.unwrap(), Some(b"x".to_vec()));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(matches!(
            MemoryCache::new(0),
            Err(CacheError::OperationFailed(_))
        ));
    }
}

//! Test doubles shared by the cached accessor tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use kinlog_core::cache::{Cache, CacheError, Result as CacheResult};
use kinlog_core::model::{Entity, EntityId, Scoped};
use kinlog_core::storage::{RepositoryError, Result, ScopedStore, Store};

use crate::storage::InMemoryStore;

// Store that tracks reads and can be told to fail writes
pub struct CountingStore<E> {
    pub inner: InMemoryStore<E>,
    pub get_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub fail_writes: AtomicBool,
}

impl<E: Entity> CountingStore<E> {
    pub fn new() -> Self {
        Self {
            inner: InMemoryStore::new(),
            get_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Inserts directly, bypassing counters and the cache.
    pub async fn seed(&self, entity: E) -> E {
        self.inner.insert(entity).await.unwrap()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::ConnectionFailed("store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl<E: Entity> Store<E> for CountingStore<E> {
    async fn insert(&self, entity: E) -> Result<E> {
        self.check_writable()?;
        self.inner.insert(entity).await
    }

    async fn get(&self, id: EntityId) -> Result<Option<E>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get(id).await
    }

    async fn list_all(&self) -> Result<Vec<E>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_all().await
    }

    async fn update(&self, entity: E) -> Result<E> {
        self.check_writable()?;
        self.inner.update(entity).await
    }

    async fn delete(&self, id: EntityId) -> Result<()> {
        self.check_writable()?;
        self.inner.delete(id).await
    }

    async fn count(&self) -> Result<u64> {
        self.inner.count().await
    }
}

#[async_trait]
impl<E: Scoped> ScopedStore<E> for CountingStore<E> {
    async fn list_by_parent(&self, parent_id: EntityId) -> Result<Vec<E>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_by_parent(parent_id).await
    }
}

// Mock cache
pub struct MockCache {
    store: RwLock<HashMap<String, Vec<u8>>>,
}

impl MockCache {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.store.read().await.contains_key(key)
    }

    pub async fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.store.read().await.get(key).cloned()
    }

    /// Writes bytes without going through serialization.
    pub async fn insert_raw(&self, key: &str, value: &[u8]) {
        self.store
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
    }

    pub async fn snapshot(&self) -> HashMap<String, Vec<u8>> {
        self.store.read().await.clone()
    }
}

#[async_trait]
impl Cache for MockCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> CacheResult<()> {
        self.store
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.store.write().await.remove(key);
        Ok(())
    }
}

// Cache whose backend is unreachable
pub struct FailingCache;

#[async_trait]
impl Cache for FailingCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &[u8]) -> CacheResult<()> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }
}

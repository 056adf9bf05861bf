//! Generic cache-aside accessor.
//!
//! Wraps a `Store<E>` with the cache-aside pattern. One instantiation exists
//! per entity kind; the kind's [`Entity`] implementation supplies the key
//! prefix and the parent used for list invalidation.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use kinlog_core::cache::{all_key, deserialize_value, item_key, list_key, serialize_value, Cache};
use kinlog_core::model::{AccessControlled, Entity, EntityId, Scoped};
use kinlog_core::storage::{Result, ScopedStore, Store};

/// Cache-aside accessor for one entity kind.
///
/// - **Reads**: check the cache first; on a miss read the store and populate
///   the cache. Absent rows are never cached.
/// - **Writes**: mutate the store first. Only after the store succeeds is the
///   cache repaired: the item key is set (or removed on delete) and the list
///   keys that could contain the entity are removed.
///
/// Cache failures are logged and swallowed; store failures propagate
/// unchanged. There is no locking here, so a reader can observe the old
/// cached value between another writer's store commit and its cache repair.
///
/// # Type Parameters
///
/// * `E` - The entity kind
/// * `S` - The underlying store implementation
/// * `C` - The cache implementation
pub struct CachedAccessor<E, S, C>
where
    E: Entity,
    S: Store<E> + ?Sized,
    C: Cache + ?Sized,
{
    store: Arc<S>,
    cache: Arc<C>,
    _kind: PhantomData<fn() -> E>,
}

impl<E, S, C> Clone for CachedAccessor<E, S, C>
where
    E: Entity,
    S: Store<E> + ?Sized,
    C: Cache + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            cache: Arc::clone(&self.cache),
            _kind: PhantomData,
        }
    }
}

impl<E, S, C> CachedAccessor<E, S, C>
where
    E: Entity,
    S: Store<E> + ?Sized,
    C: Cache + ?Sized,
{
    /// Creates a new accessor over a shared store and cache.
    pub fn new(store: Arc<S>, cache: Arc<C>) -> Self {
        Self {
            store,
            cache,
            _kind: PhantomData,
        }
    }

    /// Deletes an entity the caller already holds.
    ///
    /// Unlike [`Store::delete`], the parent is taken from `entity`, so the
    /// store is not read first.
    pub async fn delete_entity(&self, entity: &E) -> Result<()> {
        let id = entity.id();
        self.store.delete(id).await?;

        self.evict(id, entity.parent_id()).await;

        tracing::debug!(kind = E::KIND, id, "Entity deleted");
        Ok(())
    }

    /// Re-reads an entity from the store and overwrites its cached copy.
    ///
    /// Use after the store was changed through another path. If the row is
    /// gone, the cached copy is removed.
    pub async fn refresh(&self, id: EntityId) -> Result<Option<E>> {
        let entity = self.store.get(id).await?;

        match &entity {
            Some(e) => self.cache_value(&item_key::<E>(id), e).await,
            None => self.invalidate(&item_key::<E>(id)).await,
        }

        tracing::debug!(kind = E::KIND, id, found = entity.is_some(), "Entity refreshed");
        Ok(entity)
    }

    /// Two-tier lookup shared by every read.
    ///
    /// Returns the cached value if it deserializes. Otherwise calls `fetch`
    /// and caches its result when it is `Some`.
    async fn read_through<T, F, Fut>(&self, key: &str, fetch: F) -> Result<Option<T>>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<Option<T>>> + Send,
    {
        match self.cache.get(key).await {
            Ok(Some(bytes)) => match deserialize_value::<T>(&bytes) {
                Ok(value) => {
                    tracing::trace!(kind = E::KIND, key, "Cache hit");
                    return Ok(Some(value));
                }
                // Deserialization failed - treat as cache miss
                Err(err) => {
                    tracing::warn!(kind = E::KIND, key, error = %err, "Cache value deserialization failed");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(kind = E::KIND, key, error = %err, "Cache read failed");
            }
        }

        tracing::trace!(kind = E::KIND, key, "Cache miss");
        let value = fetch().await?;

        if let Some(ref v) = value {
            self.cache_value(key, v).await;
        }

        Ok(value)
    }

    /// Serializes and stores a value, logging instead of failing.
    async fn cache_value<T: Serialize + Sync + ?Sized>(&self, key: &str, value: &T) {
        let bytes = match serialize_value(value) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(kind = E::KIND, key, error = %err, "Cache value serialization failed");
                return;
            }
        };

        if let Err(err) = self.cache.set(key, &bytes).await {
            tracing::warn!(kind = E::KIND, key, error = %err, "Failed to populate cache");
        }
    }

    /// Removes a key, logging instead of failing.
    async fn invalidate(&self, key: &str) {
        if let Err(err) = self.cache.delete(key).await {
            tracing::warn!(kind = E::KIND, key, error = %err, "Failed to invalidate cache");
        }
    }

    /// Removes the list keys whose membership may change when an entity of
    /// `parent_id` is written.
    async fn invalidate_lists(&self, parent_id: Option<EntityId>) {
        if let Some(parent_id) = parent_id {
            self.invalidate(&list_key::<E>(parent_id)).await;
        }
        self.invalidate(&all_key::<E>()).await;
    }

    /// Cache repair after a successful insert or update.
    async fn remember(&self, entity: &E) {
        self.cache_value(&item_key::<E>(entity.id()), entity).await;
        self.invalidate_lists(entity.parent_id()).await;
    }

    /// Cache repair after a successful delete.
    async fn evict(&self, id: EntityId, parent_id: Option<EntityId>) {
        self.invalidate(&item_key::<E>(id)).await;
        self.invalidate_lists(parent_id).await;
    }
}

#[async_trait]
impl<E, S, C> Store<E> for CachedAccessor<E, S, C>
where
    E: Entity,
    S: Store<E> + ?Sized + 'static,
    C: Cache + ?Sized + 'static,
{
    async fn insert(&self, entity: E) -> Result<E> {
        // 1. Persist to storage (assigns the id)
        let stored = self.store.insert(entity).await?;

        // 2. Populate item cache, invalidate lists
        self.remember(&stored).await;

        tracing::debug!(
            kind = E::KIND,
            id = stored.id(),
            parent_id = ?stored.parent_id(),
            "Entity added"
        );
        Ok(stored)
    }

    async fn get(&self, id: EntityId) -> Result<Option<E>> {
        let key = item_key::<E>(id);
        self.read_through(&key, || self.store.get(id)).await
    }

    async fn list_all(&self) -> Result<Vec<E>> {
        let key = all_key::<E>();
        let entities = self
            .read_through(&key, move || async move { self.store.list_all().await.map(Some) })
            .await?;
        Ok(entities.unwrap_or_default())
    }

    async fn update(&self, entity: E) -> Result<E> {
        // The previous parent is needed when the update moves the entity to
        // another progeny; its list would otherwise keep the old copy.
        let previous_parent = match entity.parent_id() {
            Some(_) => self
                .store
                .get(entity.id())
                .await?
                .and_then(|previous| previous.parent_id()),
            None => None,
        };

        // 1. Persist to storage
        let stored = self.store.update(entity).await?;

        // 2. Overwrite item cache, invalidate lists
        self.remember(&stored).await;
        if previous_parent.is_some() && previous_parent != stored.parent_id() {
            self.invalidate_lists(previous_parent).await;
        }

        tracing::debug!(
            kind = E::KIND,
            id = stored.id(),
            parent_id = ?stored.parent_id(),
            "Entity updated"
        );
        Ok(stored)
    }

    /// Deletes by id and evicts the item and its lists.
    ///
    /// Scoped kinds read the row first, since their parent decides which
    /// progeny list to evict. Unscoped kinds have no parent and skip that
    /// read. Use [`CachedAccessor::delete_entity`] when the entity is at hand.
    async fn delete(&self, id: EntityId) -> Result<()> {
        let parent_id = if E::SCOPED {
            self.store.get(id).await?.and_then(|e| e.parent_id())
        } else {
            None
        };

        // 1. Persist deletion to storage
        self.store.delete(id).await?;

        // 2. Invalidate item and list caches
        self.evict(id, parent_id).await;

        tracing::debug!(kind = E::KIND, id, ?parent_id, "Entity deleted");
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        self.store.count().await
    }
}

#[async_trait]
impl<E, S, C> ScopedStore<E> for CachedAccessor<E, S, C>
where
    E: Scoped,
    S: ScopedStore<E> + ?Sized + 'static,
    C: Cache + ?Sized + 'static,
{
    async fn list_by_parent(&self, parent_id: EntityId) -> Result<Vec<E>> {
        let key = list_key::<E>(parent_id);
        let entities = self
            .read_through(&key, move || async move {
                self.store.list_by_parent(parent_id).await.map(Some)
            })
            .await?;

        tracing::trace!(kind = E::KIND, parent_id, "Listed entities by parent");
        Ok(entities.unwrap_or_default())
    }
}

impl<E, S, C> CachedAccessor<E, S, C>
where
    E: Scoped + AccessControlled,
    S: ScopedStore<E> + ?Sized + 'static,
    C: Cache + ?Sized + 'static,
{
    /// Lists the entities of a progeny that a user with `user_access_level`
    /// may see.
    ///
    /// Lower levels are more privileged: an entity is visible when its own
    /// access level is at least the user's. Served from the cached list.
    pub async fn list_accessible(
        &self,
        parent_id: EntityId,
        user_access_level: i32,
    ) -> Result<Vec<E>> {
        let entities = self.list_by_parent(parent_id).await?;
        Ok(entities
            .into_iter()
            .filter(|e| e.access_level() >= user_access_level)
            .collect())
    }
}

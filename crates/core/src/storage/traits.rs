use async_trait::async_trait;

use crate::model::{Entity, EntityId, Scoped};

use super::Result;

/// Durable store for one entity kind. The store is the source of truth.
#[async_trait]
pub trait Store<E: Entity>: Send + Sync {
    /// Inserts a new entity and returns it with its store-assigned id.
    ///
    /// Any id already set on `entity` is ignored.
    async fn insert(&self, entity: E) -> Result<E>;

    /// Gets an entity by its id.
    async fn get(&self, id: EntityId) -> Result<Option<E>>;

    /// Gets every entity of the kind.
    async fn list_all(&self) -> Result<Vec<E>>;

    /// Replaces the stored row matching `entity.id()` and returns the stored
    /// entity.
    async fn update(&self, entity: E) -> Result<E>;

    /// Deletes an entity by its id.
    async fn delete(&self, id: EntityId) -> Result<()>;

    /// Returns the number of stored entities of the kind.
    async fn count(&self) -> Result<u64>;
}

/// Store for entities that belong to a progeny.
#[async_trait]
pub trait ScopedStore<E: Scoped>: Store<E> {
    /// Gets all entities that belong to `parent_id`. Empty if there are none.
    async fn list_by_parent(&self, parent_id: EntityId) -> Result<Vec<E>>;
}

//! In-memory store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use kinlog_core::model::{Entity, EntityId, Scoped};
use kinlog_core::storage::{RepositoryError, Result, ScopedStore, Store};

/// Rows of one kind plus the next identifier to hand out.
#[derive(Debug)]
struct Table<E> {
    rows: BTreeMap<EntityId, E>,
    next_id: EntityId,
}

/// In-memory store for a single entity kind.
///
/// Data is not persisted and is lost when the last clone is dropped.
/// Clones share the same rows.
#[derive(Debug, Clone)]
pub struct InMemoryStore<E> {
    table: Arc<RwLock<Table<E>>>,
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryStore<E> {
    /// Creates a new empty store. The first inserted row gets id 1.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

#[async_trait]
impl<E: Entity> Store<E> for InMemoryStore<E> {
    async fn insert(&self, mut entity: E) -> Result<E> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        entity.set_id(id);
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn get(&self, id: EntityId) -> Result<Option<E>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<E>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update(&self, entity: E) -> Result<E> {
        let id = entity.id();
        if !entity.is_persisted() {
            return Err(RepositoryError::InvalidData(format!(
                "cannot update {} without an id",
                E::KIND
            )));
        }

        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity)
            }
            None => Err(RepositoryError::not_found(E::KIND, id)),
        }
    }

    async fn delete(&self, id: EntityId) -> Result<()> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_none() {
            return Err(RepositoryError::not_found(E::KIND, id));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        let table = self.table.read().await;
        Ok(table.rows.len() as u64)
    }
}

#[async_trait]
impl<E: Scoped> ScopedStore<E> for InMemoryStore<E> {
    async fn list_by_parent(&self, parent_id: EntityId) -> Result<Vec<E>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|e| e.parent_id() == Some(parent_id))
            .cloned()
            .collect())
    }
}

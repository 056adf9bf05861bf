//! Cache key derivation.
//!
//! Keys are built from the entity kind tag so that every kind owns its own
//! namespace:
//!
//! - item key: `{kind}:{id}`
//! - list key: `{kind}:progeny:{parent_id}`
//! - all key: `{kind}:all`
//!
//! Only item keys have a numeric second segment, so the three forms never
//! collide within a kind.

use crate::model::{Entity, EntityId};

/// Returns the cache key for a single entity.
pub fn item_key<E: Entity>(id: EntityId) -> String {
    format!("{}:{}", E::KIND, id)
}

/// Returns the cache key for all entities of a kind that belong to a progeny.
pub fn list_key<E: Entity>(parent_id: EntityId) -> String {
    format!("{}:progeny:{}", E::KIND, parent_id)
}

/// Returns the cache key for every entity of a kind.
pub fn all_key<E: Entity>() -> String {
    format!("{}:all", E::KIND)
}

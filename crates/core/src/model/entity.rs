use serde::{de::DeserializeOwned, Serialize};

/// Store-assigned identifier shared by every entity kind.
///
/// Identifiers are positive once persisted. A value of `0` marks an entity
/// that has not been stored yet.
pub type EntityId = i64;

/// An entity managed by a store and mirrored in the cache.
///
/// The associated `KIND` is the cache-key discriminator. It must be unique
/// across all entity kinds so that keys never collide.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Cache-key discriminator for this kind (e.g. `"note"`).
    const KIND: &'static str;

    /// True for kinds that belong to a progeny and are listed under it.
    const SCOPED: bool = false;

    /// Returns the store-assigned identifier (`0` before the first persist).
    fn id(&self) -> EntityId;

    /// Assigns the identifier. Only stores should call this.
    fn set_id(&mut self, id: EntityId);

    /// Returns the parent progeny for scoped kinds, `None` otherwise.
    fn parent_id(&self) -> Option<EntityId> {
        None
    }

    /// Returns true once the store has assigned an identifier.
    fn is_persisted(&self) -> bool {
        self.id() > 0
    }
}

/// Marker for entities that belong to exactly one progeny.
///
/// Implementors must always return `Some` from [`Entity::parent_id`] and
/// set [`Entity::SCOPED`].
pub trait Scoped: Entity {}

/// Entities whose visibility is restricted by an access level.
///
/// Lower levels are more privileged; `0` is reserved for admins.
pub trait AccessControlled: Entity {
    fn access_level(&self) -> i32;
}

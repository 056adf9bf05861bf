//! Cache-aside accessors.
//!
//! [`CachedAccessor`] wraps a [`Store`](kinlog_core::storage::Store) and a
//! [`Cache`](kinlog_core::cache::Cache):
//!
//! - **Reads**: Check cache first, on miss fetch from the store and populate cache
//! - **Writes**: Persist to the store, then set the item key and invalidate lists
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let store = Arc::new(SqliteStore::new("kinlog.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000)?);
//!
//! let notes: NoteAccessor<_, _> = CachedAccessor::new(store, cache);
//! let note = notes.insert(Note::new(1, "First steps", "Walked to the couch")).await?;
//! ```

mod accessor;
mod language;
mod note;
mod progeny;
mod skill;

#[cfg(test)]
pub(crate) mod testing;

pub use accessor::CachedAccessor;
pub use language::LanguageAccessor;
pub use note::NoteAccessor;
pub use progeny::ProgenyAccessor;
pub use skill::SkillAccessor;

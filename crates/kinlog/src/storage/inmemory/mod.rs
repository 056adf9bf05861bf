//! In-memory storage backend.
//!
//! Rows live in a `BTreeMap` per entity kind wrapped in `Arc<RwLock<_>>`.
//! Identifiers are assigned sequentially starting at 1, which makes this
//! the reference store for tests and for runs without the `sqlite` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use kinlog::storage::inmemory::InMemoryStore;
//!
//! let notes = InMemoryStore::<Note>::new();
//! let note = notes.insert(Note::new(1, "Title", "Content")).await?;
//! assert_eq!(note.note_id, 1);
//! ```

mod store;

pub use store::InMemoryStore;

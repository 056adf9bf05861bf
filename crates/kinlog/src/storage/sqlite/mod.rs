//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of the store traits
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for
//! async wrapping. Identifiers come from `INTEGER PRIMARY KEY AUTOINCREMENT`
//! columns, so they start at 1 and are never reused.

mod conversions;
mod error;
mod record;
mod schema;
mod store;

pub use store::SqliteStore;

//! Storage backend implementations and the cache-aside accessor.
//!
//! This module provides concrete implementations of the store traits
//! defined in `kinlog_core::storage`, plus the cached decorator that every
//! caller goes through.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite store using `rusqlite` and `tokio-rusqlite`
//!
//! The in-memory store is always compiled. It backs the test suites and is
//! used by the binary when the `sqlite` feature is disabled.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p kinlog
//! ```
//!
//! Build with the in-memory store only:
//! ```bash
//! cargo build -p kinlog --no-default-features
//! ```

pub mod cached;
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use cached::CachedAccessor;
pub use inmemory::InMemoryStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

//! Cache backend implementations.
//!
//! This module provides concrete implementations of the `Cache` trait
//! defined in `kinlog_core::cache`.
//!
//! # Feature Flags
//!
//! - `redis`: Redis cache using the redis crate. Without it only the
//!   in-memory cache is available.

pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;

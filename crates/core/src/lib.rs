//! Core building blocks for kinlog.
//!
//! Everything in this crate is free of I/O: the entity model, cache key
//! derivation, cache value serialization, and the collaborator traits that
//! storage and cache backends implement.

pub mod cache;
pub mod model;
pub mod storage;

//! Application state with cache-aside accessors.
//!
//! This module wires one store and one cache into an accessor per entity
//! kind. Backends are selected at compile time via feature flags; the
//! accessors hold them as trait objects.

use std::sync::Arc;

use kinlog_core::cache::Cache;
use kinlog_core::model::{LanguageItem, Note, Progeny, Skill};
use kinlog_core::storage::{ScopedStore, Store};

use crate::config::Config;
use crate::storage::cached::{LanguageAccessor, NoteAccessor, ProgenyAccessor, SkillAccessor};

/// Shared application state.
///
/// Cheap to clone; every accessor shares the same store and cache.
#[derive(Clone)]
pub struct AppState {
    pub languages: LanguageAccessor<dyn Store<LanguageItem>, dyn Cache>,
    pub notes: NoteAccessor<dyn ScopedStore<Note>, dyn Cache>,
    pub skills: SkillAccessor<dyn ScopedStore<Skill>, dyn Cache>,
    pub progenies: ProgenyAccessor<dyn Store<Progeny>, dyn Cache>,
}

impl AppState {
    /// Creates an AppState from one store per kind and a shared cache.
    fn build(
        languages: Arc<dyn Store<LanguageItem>>,
        notes: Arc<dyn ScopedStore<Note>>,
        skills: Arc<dyn ScopedStore<Skill>>,
        progenies: Arc<dyn Store<Progeny>>,
        cache: Arc<dyn Cache>,
    ) -> Self {
        Self {
            languages: LanguageAccessor::new(languages, cache.clone()),
            notes: NoteAccessor::new(notes, cache.clone()),
            skills: SkillAccessor::new(skills, cache.clone()),
            progenies: ProgenyAccessor::new(progenies, cache),
        }
    }

    /// Creates AppState with the feature-selected store and cache.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let cache = open_cache(config).await?;

        #[cfg(feature = "sqlite")]
        let state = {
            let sqlite = Arc::new(crate::storage::SqliteStore::new(&config.sqlite_path).await?);
            tracing::debug!(path = %config.sqlite_path, "Opened SQLite store");
            Self::build(sqlite.clone(), sqlite.clone(), sqlite.clone(), sqlite, cache)
        };

        #[cfg(not(feature = "sqlite"))]
        let state = Self::in_memory(cache);

        Ok(state)
    }

    /// Creates AppState with in-memory stores.
    ///
    /// Useful for testing without any external dependencies.
    #[cfg_attr(feature = "sqlite", allow(dead_code))]
    pub fn in_memory(cache: Arc<dyn Cache>) -> Self {
        use crate::storage::InMemoryStore;

        Self::build(
            Arc::new(InMemoryStore::<LanguageItem>::new()),
            Arc::new(InMemoryStore::<Note>::new()),
            Arc::new(InMemoryStore::<Skill>::new()),
            Arc::new(InMemoryStore::<Progeny>::new()),
            cache,
        )
    }
}

#[cfg(feature = "redis")]
async fn open_cache(config: &Config) -> Result<Arc<dyn Cache>, anyhow::Error> {
    let cache = crate::cache::RedisCache::new(&config.redis_url).await?;
    tracing::debug!(url = %config.redis_url, "Connected to Redis cache");
    Ok(Arc::new(cache))
}

#[cfg(not(feature = "redis"))]
async fn open_cache(config: &Config) -> Result<Arc<dyn Cache>, anyhow::Error> {
    let cache = crate::cache::MemoryCache::new(config.cache_max_entries)?;
    Ok(Arc::new(cache))
}

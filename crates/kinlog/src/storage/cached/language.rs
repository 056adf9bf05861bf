//! Cached access to UI languages.
//!
//! Languages are not scoped to a progeny, so writes only invalidate the
//! item key and the `language:all` list.

use kinlog_core::cache::Cache;
use kinlog_core::model::LanguageItem;
use kinlog_core::storage::{Result, Store};

use super::CachedAccessor;

pub type LanguageAccessor<S, C> = CachedAccessor<LanguageItem, S, C>;

impl<S, C> CachedAccessor<LanguageItem, S, C>
where
    S: Store<LanguageItem> + ?Sized + 'static,
    C: Cache + ?Sized + 'static,
{
    /// Finds a language by its code (case-insensitive), using the cached
    /// list of all languages.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<LanguageItem>> {
        let languages = self.list_all().await?;
        Ok(languages
            .into_iter()
            .find(|language| language.code.eq_ignore_ascii_case(code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use kinlog_core::cache::{all_key, item_key};

    use crate::storage::cached::testing::{CountingStore, MockCache};

    fn setup() -> (
        Arc<CountingStore<LanguageItem>>,
        Arc<MockCache>,
        LanguageAccessor<CountingStore<LanguageItem>, MockCache>,
    ) {
        let store = Arc::new(CountingStore::new());
        let cache = Arc::new(MockCache::new());
        let accessor = CachedAccessor::new(store.clone(), cache.clone());
        (store, cache, accessor)
    }

    #[tokio::test]
    async fn test_add_then_get_is_served_from_cache() {
        let (store, _cache, accessor) = setup();

        let added = accessor
            .insert(LanguageItem::new("Language1", "A", "A"))
            .await
            .unwrap();
        let fetched = accessor.get(added.id).await.unwrap();

        assert!(added.id > 0);
        let fetched = fetched.unwrap();
        assert_eq!(fetched.name, "Language1");
        assert_eq!(fetched.code, "A");
        assert_eq!(fetched.icon, "A");
        assert_eq!(fetched, added);
        assert_eq!(store.get_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_add_ignores_caller_supplied_id() {
        let (_store, _cache, accessor) = setup();

        let added = accessor
            .insert(LanguageItem::new("Language1", "A", "A").with_id(99))
            .await
            .unwrap();

        assert_eq!(added.id, 1);
        assert_eq!(accessor.get(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_replaces_cached_value() {
        let (_store, _cache, accessor) = setup();
        let mut language = accessor
            .insert(LanguageItem::new("Language1", "A", "A"))
            .await
            .unwrap();
        accessor.get(language.id).await.unwrap();

        language.name = "Language2".to_string();
        let updated = accessor.update(language.clone()).await.unwrap();

        assert_eq!(updated.name, "Language2");
        assert_eq!(accessor.get(language.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_without_id_is_invalid() {
        let (_store, cache, accessor) = setup();

        let result = accessor
            .update(LanguageItem::new("Language1", "A", "A"))
            .await;

        assert!(matches!(
            result,
            Err(kinlog_core::storage::RepositoryError::InvalidData(_))
        ));
        assert!(cache.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_get_returns_none() {
        let (_store, cache, accessor) = setup();
        let language = accessor
            .insert(LanguageItem::new("Language1", "A", "A"))
            .await
            .unwrap();

        accessor.delete(language.id).await.unwrap();

        assert!(!cache.contains(&item_key::<LanguageItem>(language.id)).await);
        assert_eq!(accessor.get(language.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_skips_store_read() {
        let (store, cache, accessor) = setup();
        let language = accessor
            .insert(LanguageItem::new("Language1", "A", "A"))
            .await
            .unwrap();
        accessor.list_all().await.unwrap();

        accessor.delete(language.id).await.unwrap();

        assert_eq!(store.get_calls.load(Ordering::SeqCst), 0);
        assert!(!cache.contains(&all_key::<LanguageItem>()).await);
        assert!(matches!(
            accessor.delete(language.id).await,
            Err(kinlog_core::storage::RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_all_caches_empty_list() {
        let (store, cache, accessor) = setup();

        assert!(accessor.list_all().await.unwrap().is_empty());
        assert!(accessor.list_all().await.unwrap().is_empty());

        assert_eq!(store.list_calls.load(Ordering::SeqCst), 1);
        assert!(cache.contains(&all_key::<LanguageItem>()).await);
    }

    #[tokio::test]
    async fn test_find_by_code_uses_all_list() {
        let (store, _cache, accessor) = setup();
        accessor
            .insert(LanguageItem::new("English", "en-US", "us.png"))
            .await
            .unwrap();
        accessor
            .insert(LanguageItem::new("Dansk", "da-DK", "dk.png"))
            .await
            .unwrap();

        let dansk = accessor.find_by_code("DA-dk").await.unwrap();
        let missing = accessor.find_by_code("de-DE").await.unwrap();

        assert_eq!(dansk.map(|l| l.name), Some("Dansk".to_string()));
        assert!(missing.is_none());
        assert_eq!(store.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_count_passes_through() {
        let (_store, _cache, accessor) = setup();
        accessor
            .insert(LanguageItem::new("Language1", "A", "A"))
            .await
            .unwrap();

        assert_eq!(accessor.count().await.unwrap(), 1);
    }
}

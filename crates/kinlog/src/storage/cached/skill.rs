//! Cached access to skills.

use super::CachedAccessor;
use kinlog_core::model::Skill;

pub type SkillAccessor<S, C> = CachedAccessor<Skill, S, C>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use kinlog_core::cache::{item_key, list_key};
    use kinlog_core::storage::{ScopedStore, Store};

    use crate::storage::cached::testing::{CountingStore, FailingCache, MockCache};

    fn setup() -> (
        Arc<MockCache>,
        SkillAccessor<CountingStore<Skill>, MockCache>,
    ) {
        let cache = Arc::new(MockCache::new());
        let accessor = CachedAccessor::new(Arc::new(CountingStore::new()), cache.clone());
        (cache, accessor)
    }

    #[tokio::test]
    async fn test_add_caches_item_and_invalidates_list() {
        let (cache, accessor) = setup();
        accessor.list_by_parent(4).await.unwrap();

        let skill = accessor
            .insert(Skill::new(4, "Crawling", "mom@example.com"))
            .await
            .unwrap();

        assert!(cache.contains(&item_key::<Skill>(skill.skill_id)).await);
        assert!(!cache.contains(&list_key::<Skill>(4)).await);
        assert_eq!(accessor.list_by_parent(4).await.unwrap(), vec![skill]);
    }

    #[tokio::test]
    async fn test_update_access_level_keeps_other_fields() {
        let (_cache, accessor) = setup();
        let skill = accessor
            .insert(Skill::new(4, "Crawling", "mom@example.com"))
            .await
            .unwrap();
        assert_eq!(skill.access_level, 0);
        accessor.get(skill.skill_id).await.unwrap();

        accessor
            .update(skill.clone().with_access_level(5))
            .await
            .unwrap();

        let fetched = accessor.get(skill.skill_id).await.unwrap().unwrap();
        assert_eq!(fetched.access_level, 5);
        assert_eq!(fetched.author, "mom@example.com");
        assert_eq!(fetched.name, "Crawling");
        assert_eq!(fetched.progeny_id, 4);
    }

    #[tokio::test]
    async fn test_update_first_observation() {
        let (_cache, accessor) = setup();
        let skill = accessor
            .insert(Skill::new(4, "Walking", "dad@example.com"))
            .await
            .unwrap();
        accessor.list_by_parent(4).await.unwrap();

        let observed = Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap();
        accessor
            .update(skill.clone().with_first_observation(observed))
            .await
            .unwrap();

        let listed = accessor.list_by_parent(4).await.unwrap();
        assert_eq!(listed[0].first_observation_date, Some(observed));
        let fetched = accessor.get(skill.skill_id).await.unwrap().unwrap();
        assert_eq!(fetched.first_observation_date, Some(observed));
    }

    #[tokio::test]
    async fn test_delete_entity_invalidates_list() {
        let (cache, accessor) = setup();
        let skill = accessor
            .insert(Skill::new(4, "Walking", "dad@example.com"))
            .await
            .unwrap();
        accessor.list_by_parent(4).await.unwrap();

        accessor.delete_entity(&skill).await.unwrap();

        assert!(!cache.contains(&list_key::<Skill>(4)).await);
        assert!(accessor.list_by_parent(4).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failing_cache_still_serves_skills() {
        let accessor: SkillAccessor<_, _> =
            CachedAccessor::new(Arc::new(CountingStore::<Skill>::new()), Arc::new(FailingCache));

        let skill = accessor
            .insert(Skill::new(4, "Walking", "dad@example.com").with_access_level(2))
            .await
            .unwrap();

        assert_eq!(accessor.get(skill.skill_id).await.unwrap(), Some(skill.clone()));
        assert_eq!(accessor.list_accessible(4, 1).await.unwrap(), vec![skill]);
    }
}

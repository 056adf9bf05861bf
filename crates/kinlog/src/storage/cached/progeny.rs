//! Cached access to progeny profiles.

use kinlog_core::cache::Cache;
use kinlog_core::model::Progeny;
use kinlog_core::storage::{Result, Store};

use super::CachedAccessor;

pub type ProgenyAccessor<S, C> = CachedAccessor<Progeny, S, C>;

impl<S, C> CachedAccessor<Progeny, S, C>
where
    S: Store<Progeny> + ?Sized + 'static,
    C: Cache + ?Sized + 'static,
{
    /// Lists the progenies `email` administers, using the cached list of
    /// all progenies.
    pub async fn list_for_admin(&self, email: &str) -> Result<Vec<Progeny>> {
        let progenies = self.list_all().await?;
        Ok(progenies
            .into_iter()
            .filter(|progeny| progeny.is_admin(email))
            .collect())
    }
}

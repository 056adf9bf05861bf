use async_trait::async_trait;

use super::Result;

/// Byte-oriented key-value cache shared by every accessor.
///
/// Last write wins per key. Entries never expire on their own; the
/// accessors remove them explicitly.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache, replacing any previous value.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Deletes a value from the cache by key. Missing keys are not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}

use crate::error::StoreError;
use async_trait::async_trait;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// A string-keyed, string-valued store.
///
/// This is the only contract the shortener needs from its backing store.
/// Implementations can wrap Redis, an in-process map, or any other
/// key-value service.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Looks up the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent. A present but empty value
    /// is `Ok(Some(String::new()))`.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    async fn put(&self, key: &str, value: &str) -> Result<()>;
}

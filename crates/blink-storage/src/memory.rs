use async_trait::async_trait;
use blink_core::store::{KvStore, Result};
use dashmap::DashMap;

/// In-process implementation of [`KvStore`] backed by a [`DashMap`].
///
/// Nothing is persisted; the map lives as long as the process. Operations
/// never fail.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    storage: DashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl KvStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage.get(key).map(|value| value.clone()))
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.storage.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn put_and_get() {
        let store = InMemoryStore::new();

        store.put("abc12", "https://example.com").await.unwrap();

        let value = store.get("abc12").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let store = InMemoryStore::new();
        assert!(store.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_value_is_distinct_from_absence() {
        let store = InMemoryStore::new();

        store.put("empty", "").await.unwrap();

        assert_eq!(store.get("empty").await.unwrap(), Some(String::new()));
        assert_eq!(store.get("other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_overwrites_silently() {
        let store = InMemoryStore::new();

        store.put("abc12", "https://old.example").await.unwrap();
        store.put("abc12", "https://new.example").await.unwrap();

        let value = store.get("abc12").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://new.example"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_access() {
        let store = Arc::new(InMemoryStore::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let key = format!("slug-{:03}", i);
                let value = format!("https://example{}.com", i);
                store.put(&key, &value).await.unwrap();
            }));
        }

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let _ = store.get(&format!("slug-{:03}", i)).await;
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let value = store.get(&format!("slug-{:03}", i)).await.unwrap();
            assert_eq!(value, Some(format!("https://example{}.com", i)));
        }
    }
}

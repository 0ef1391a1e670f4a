use std::collections::BTreeMap;

use async_trait::async_trait;
use ns_core::{Error, ObjectStore, Result};
use tokio::sync::RwLock;

struct StoredObject {
    bytes: Vec<u8>,
    content_type: String,
}

/// In-process object store. The BTreeMap keeps listings lexicographic,
/// matching what a bucket listing returns.
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<BTreeMap<String, StoredObject>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn content_type(&self, key: &str) -> Option<String> {
        self.objects
            .read()
            .await
            .get(key)
            .map(|object| object.content_type.clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .objects
            .read()
            .await
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.objects
            .read()
            .await
            .get(key)
            .map(|object| object.bytes.clone())
            .ok_or_else(|| Error::Storage(format!("no such object: {}", key)))
    }

    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        self.objects.write().await.insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.objects
            .write()
            .await
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| Error::Storage(format!("no such object: {}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_delete_round_trip() {
        let store = MemoryStore::new();
        store
            .put("news_sentiment/a.json", b"[]".to_vec(), "application/json")
            .await
            .unwrap();

        assert_eq!(store.get("news_sentiment/a.json").await.unwrap(), b"[]");
        assert_eq!(
            store.content_type("news_sentiment/a.json").await.as_deref(),
            Some("application/json")
        );

        store.delete("news_sentiment/a.json").await.unwrap();
        assert!(store.get("news_sentiment/a.json").await.is_err());
        assert!(store.delete("news_sentiment/a.json").await.is_err());
    }

    #[tokio::test]
    async fn list_is_prefix_filtered_and_ordered() {
        let store = MemoryStore::new();
        for key in [
            "news_sentiment/sentiment_20260805_120000.json",
            "other/ignored.json",
            "news_sentiment/sentiment_20260805_090000.json",
        ] {
            store.put(key, Vec::new(), "application/json").await.unwrap();
        }

        let keys = store.list("news_sentiment/").await.unwrap();
        assert_eq!(
            keys,
            vec![
                "news_sentiment/sentiment_20260805_090000.json",
                "news_sentiment/sentiment_20260805_120000.json",
            ]
        );
    }
}

//! In-memory object store for testing and local development

use crate::{ObjectStore, Result, StoreError};
use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;

/// An in-memory object store keyed by `(bucket, key)`
#[derive(Clone, Default)]
pub struct MemoryObjectStore {
    objects: Arc<DashMap<(String, String), Bytes>>,
    latency: Option<Duration>,
}

impl MemoryObjectStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self {
            objects: Arc::new(DashMap::new()),
            latency: None,
        }
    }

    /// Delay every read by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Store an object, replacing any previous content
    pub fn put_object(&self, bucket: &str, key: &str, data: impl Into<Bytes>) {
        self.objects
            .insert((bucket.to_string(), key.to_string()), data.into());
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn connect(&self) -> Result<()> {
        Ok(())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::backend("NoSuchKey", "The specified key does not exist."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get() {
        let store = MemoryObjectStore::new();
        store.put_object("photos", "cat.png", vec![0u8, 1, 2, 255]);

        let data = store.get_object("photos", "cat.png").await.unwrap();
        assert_eq!(&data[..], &[0u8, 1, 2, 255]);
    }

    #[tokio::test]
    async fn test_objects_are_scoped_by_bucket() {
        let store = MemoryObjectStore::new();
        store.put_object("a", "key", b"from a".as_slice());

        assert!(store.get_object("b", "key").await.is_err());
    }

    #[tokio::test]
    async fn test_missing_object() {
        let store = MemoryObjectStore::new();

        let err = store.get_object("bucket", "key").await.unwrap_err();
        assert_eq!(err.code(), Some("NoSuchKey"));
    }

    #[tokio::test]
    async fn test_put_replaces() {
        let store = MemoryObjectStore::new();
        store.put_object("bucket", "key", b"old".as_slice());
        store.put_object("bucket", "key", b"new".as_slice());

        let data = store.get_object("bucket", "key").await.unwrap();
        assert_eq!(&data[..], b"new");
    }
}

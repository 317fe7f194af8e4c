use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{FailureSlot, reject_empty};
use crate::ports::{BlobStore, PortError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// InMemoryBlobStore は (bucket, key) → Object
///
/// 同じ key への put は上書き。
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    objects: Mutex<BTreeMap<(String, String), StoredObject>>,
    failure: FailureSlot,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// (bucket, key) 順に並んだ全 Object
    pub fn objects(&self) -> Vec<((String, String), StoredObject)> {
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn fail_next(&self, err: PortError) {
        self.failure.arm(err);
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), PortError> {
        self.failure.take()?;
        reject_empty("bucket", bucket)?;
        reject_empty("key", key)?;
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(
                (bucket.to_string(), key.to_string()),
                StoredObject {
                    body,
                    content_type: content_type.to_string(),
                },
            );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_overwrites_same_key() {
        let store = InMemoryBlobStore::new();
        store.put_object("b", "k", b"1".to_vec(), "text/plain").await.unwrap();
        store.put_object("b", "k", b"2".to_vec(), "application/json").await.unwrap();

        assert_eq!(store.objects().len(), 1);
        let object = store.get("b", "k").unwrap();
        assert_eq!(object.body, b"2".to_vec());
        assert_eq!(object.content_type, "application/json");
    }

    #[tokio::test]
    async fn empty_bucket_is_rejected() {
        let store = InMemoryBlobStore::new();
        let err = store.put_object("", "k", vec![], "x").await.unwrap_err();
        assert_eq!(err, PortError::Rejected("bucket must not be empty".into()));
    }
}

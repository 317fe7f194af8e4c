use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{FailureSlot, reject_empty};
use crate::ports::{PortError, SecretStore};

/// InMemorySecretStore は name → secret string の HashMap
#[derive(Debug, Default)]
pub struct InMemorySecretStore {
    secrets: Mutex<HashMap<String, String>>,
    failure: FailureSlot,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Secret を登録（同名は上書き）
    pub fn insert(&self, name: impl Into<String>, value: impl Into<String>) {
        self.secrets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.into(), value.into());
    }

    pub fn fail_next(&self, err: PortError) {
        self.failure.arm(err);
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get_secret_string(&self, name: &str) -> Result<String, PortError> {
        self.failure.take()?;
        reject_empty("secret id", name)?;
        self.secrets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
            .ok_or_else(|| PortError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_inserted_secret() {
        let store = InMemorySecretStore::new();
        store.insert("db", r#"{"user":"u"}"#);
        assert_eq!(store.get_secret_string("db").await.unwrap(), r#"{"user":"u"}"#);
    }

    #[tokio::test]
    async fn unknown_secret_is_not_found() {
        let store = InMemorySecretStore::new();
        assert_eq!(
            store.get_secret_string("nope").await,
            Err(PortError::NotFound("nope".into()))
        );
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let store = InMemorySecretStore::new();
        assert!(matches!(
            store.get_secret_string("").await,
            Err(PortError::Rejected(_))
        ));
    }
}

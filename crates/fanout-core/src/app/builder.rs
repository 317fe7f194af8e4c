//! HandlerBuilder - FanoutHandler の構築とワイヤリング
//!
//! # Fail-fast 設計
//! - port が 1 つでも足りなければ build() で BuildError を返す
//! - 不足している port はまとめて報告する

use std::sync::Arc;

use super::FanoutHandler;
use crate::ports::{BlobStore, ConfigSource, EnvConfigSource, SecretStore, StreamSink, TableStore};

/// BuildError は Handler 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing ports: {0:?}. These ports must be provided before build().")]
    MissingPorts(Vec<&'static str>),
}

/// HandlerBuilder は FanoutHandler を構築
///
/// # 使用例
/// ```ignore
/// let handler = HandlerBuilder::new()
///     .secrets(Arc::new(secrets))
///     .stream(Arc::new(stream))
///     .table(Arc::new(table))
///     .blobs(Arc::new(blobs))
///     .build()?;
/// ```
///
/// ConfigSource を指定しなければ EnvConfigSource を使う。
#[derive(Default)]
pub struct HandlerBuilder {
    config: Option<Arc<dyn ConfigSource>>,
    secrets: Option<Arc<dyn SecretStore>>,
    stream: Option<Arc<dyn StreamSink>>,
    table: Option<Arc<dyn TableStore>>,
    blobs: Option<Arc<dyn BlobStore>>,
}

impl HandlerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config_source(mut self, source: Arc<dyn ConfigSource>) -> Self {
        self.config = Some(source);
        self
    }

    pub fn secrets(mut self, store: Arc<dyn SecretStore>) -> Self {
        self.secrets = Some(store);
        self
    }

    pub fn stream(mut self, sink: Arc<dyn StreamSink>) -> Self {
        self.stream = Some(sink);
        self
    }

    pub fn table(mut self, store: Arc<dyn TableStore>) -> Self {
        self.table = Some(store);
        self
    }

    pub fn blobs(mut self, store: Arc<dyn BlobStore>) -> Self {
        self.blobs = Some(store);
        self
    }

    /// HandlerBuilder を検証して FanoutHandler を生成
    pub fn build(self) -> Result<FanoutHandler, BuildError> {
        let mut missing = Vec::new();
        if self.secrets.is_none() {
            missing.push("secret store");
        }
        if self.stream.is_none() {
            missing.push("stream sink");
        }
        if self.table.is_none() {
            missing.push("table store");
        }
        if self.blobs.is_none() {
            missing.push("blob store");
        }

        match (self.secrets, self.stream, self.table, self.blobs) {
            (Some(secrets), Some(stream), Some(table), Some(blobs)) => Ok(FanoutHandler {
                config: self.config.unwrap_or_else(|| Arc::new(EnvConfigSource)),
                secrets,
                stream,
                table,
                blobs,
            }),
            _ => Err(BuildError::MissingPorts(missing)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{InMemoryBlobStore, InMemorySecretStore, InMemoryStream, InMemoryTable};

    #[test]
    fn test_build_success() {
        let handler = HandlerBuilder::new()
            .secrets(Arc::new(InMemorySecretStore::new()))
            .stream(Arc::new(InMemoryStream::new()))
            .table(Arc::new(InMemoryTable::new()))
            .blobs(Arc::new(InMemoryBlobStore::new()))
            .build();
        assert!(handler.is_ok());
    }

    #[test]
    fn test_build_reports_every_missing_port() {
        let handler = HandlerBuilder::new()
            .stream(Arc::new(InMemoryStream::new()))
            .build();
        assert!(matches!(
            handler,
            Err(BuildError::MissingPorts(missing))
                if missing == vec!["secret store", "table store", "blob store"]
        ));
    }

    #[test]
    fn test_build_nothing_provided() {
        let err = HandlerBuilder::new().build().err().unwrap();
        assert!(err.to_string().contains("secret store"));
        assert!(err.to_string().contains("blob store"));
    }
}

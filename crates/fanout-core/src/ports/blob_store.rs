//! BlobStore port - bucket + key で指定する Object の保存（S3）

use async_trait::async_trait;

use super::PortError;

#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), PortError>;
}

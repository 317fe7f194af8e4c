//! AWS adapters - port の本番実装（Secrets Manager / Kinesis / DynamoDB / S3）
//!
//! どの adapter も SDK の client を 1 つ持つだけで、リトライやタイムアウトは
//! SDK のデフォルトに任せます。

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_kinesis::primitives::Blob;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_secretsmanager::operation::get_secret_value::{
    GetSecretValueError, GetSecretValueOutput,
};
use fanout_core::domain::TableItem;
use fanout_core::ports::{BlobStore, PortError, SecretStore, StreamSink, TableStore};

/// SdkError を PortError に変換
///
/// リクエストを組み立てられなかった場合（必須パラメータ不足など）は Rejected、
/// それ以外（通信・サービス側のエラー）は Service。
fn port_error<E, R>(err: SdkError<E, R>) -> PortError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();
    match err {
        SdkError::ConstructionFailure(_) => PortError::Rejected(message),
        _ => PortError::Service(message),
    }
}

pub struct SecretsManagerStore {
    client: aws_sdk_secretsmanager::Client,
}

impl SecretsManagerStore {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_secretsmanager::Client::new(config),
        }
    }
}

/// ResourceNotFoundException だけは NotFound として区別する
fn secret_error<R>(err: SdkError<GetSecretValueError, R>, name: &str) -> PortError
where
    R: std::fmt::Debug,
{
    let not_found = err
        .as_service_error()
        .is_some_and(|e| e.is_resource_not_found_exception());
    if not_found {
        PortError::NotFound(format!("secret {name}"))
    } else {
        port_error(err)
    }
}

/// SecretBinary だけを持つ secret は扱わない
fn secret_string(output: GetSecretValueOutput, name: &str) -> Result<String, PortError> {
    output
        .secret_string
        .ok_or_else(|| PortError::Rejected(format!("secret {name} has no SecretString")))
}

#[async_trait]
impl SecretStore for SecretsManagerStore {
    async fn get_secret_string(&self, name: &str) -> Result<String, PortError> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|err| secret_error(err, name))?;
        secret_string(output, name)
    }
}

pub struct KinesisSink {
    client: aws_sdk_kinesis::Client,
}

impl KinesisSink {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_kinesis::Client::new(config),
        }
    }
}

#[async_trait]
impl StreamSink for KinesisSink {
    async fn put_record(
        &self,
        stream_name: &str,
        data: Vec<u8>,
        partition_key: &str,
    ) -> Result<(), PortError> {
        self.client
            .put_record()
            .stream_name(stream_name)
            .data(Blob::new(data))
            .partition_key(partition_key)
            .send()
            .await
            .map_err(port_error)?;
        Ok(())
    }
}

pub struct DynamoTable {
    client: aws_sdk_dynamodb::Client,
}

impl DynamoTable {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_dynamodb::Client::new(config),
        }
    }
}

/// TableItem の属性はすべて文字列型（S）として書き込む
fn to_attribute_map(item: &TableItem) -> HashMap<String, AttributeValue> {
    item.attributes()
        .map(|(name, value)| (name.to_string(), AttributeValue::S(value.to_string())))
        .collect()
}

#[async_trait]
impl TableStore for DynamoTable {
    async fn put_item(&self, table_name: &str, item: TableItem) -> Result<(), PortError> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(to_attribute_map(&item)))
            .send()
            .await
            .map_err(port_error)?;
        Ok(())
    }
}

pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
}

impl S3BlobStore {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_s3::Client::new(config),
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), PortError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(port_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::operation::put_object::PutObjectError;
    use aws_sdk_secretsmanager::types::error::ResourceNotFoundException;
    use fanout_core::InvocationContext;

    #[test]
    fn attribute_map_uses_string_values() {
        let item = TableItem::for_invocation(&InvocationContext::new("abc-123", "demoFn"));
        let map = to_attribute_map(&item);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("id"), Some(&AttributeValue::S("abc-123".into())));
        assert_eq!(map.get("timestamp"), Some(&AttributeValue::S("abc-123".into())));
        assert_eq!(
            map.get("message"),
            Some(&AttributeValue::S("Lambda execution".into()))
        );
    }

    #[test]
    fn construction_failure_is_rejected() {
        let err: SdkError<PutObjectError, ()> = SdkError::construction_failure("bucket is required");
        assert!(matches!(port_error(err), PortError::Rejected(msg) if msg.contains("bucket is required")));
    }

    #[test]
    fn secret_without_string_is_rejected() {
        let output = GetSecretValueOutput::builder().build();
        assert_eq!(
            secret_string(output, "app/creds"),
            Err(PortError::Rejected("secret app/creds has no SecretString".into()))
        );
    }

    #[test]
    fn secret_string_is_returned_as_is() {
        let output = GetSecretValueOutput::builder().secret_string("{}").build();
        assert_eq!(secret_string(output, "app/creds"), Ok("{}".to_string()));
    }

    #[test]
    fn missing_secret_maps_to_not_found() {
        let source = GetSecretValueError::ResourceNotFoundException(
            ResourceNotFoundException::builder().build(),
        );
        let err: SdkError<GetSecretValueError, ()> = SdkError::service_error(source, ());
        assert_eq!(
            secret_error(err, "app/creds"),
            PortError::NotFound("secret app/creds".into())
        );
    }

    #[test]
    fn other_secret_failures_are_service_errors() {
        let err: SdkError<GetSecretValueError, ()> = SdkError::timeout_error("deadline exceeded");
        assert!(matches!(secret_error(err, "app/creds"), PortError::Service(_)));
    }

    #[test]
    fn timeout_is_a_service_error() {
        let err: SdkError<PutObjectError, ()> = SdkError::timeout_error("deadline exceeded");
        assert!(matches!(port_error(err), PortError::Service(_)));
    }
}

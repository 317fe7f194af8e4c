//! FanoutHandler - 1 回の invocation を処理する
//!
//! Secret 取得 → Stream 追記 → Table 書き込み → Object 保存 を直列に実行し、
//! 最初の失敗で打ち切ります。打ち切り前の書き込みはロールバックしません。

use std::sync::Arc;

use serde_json::Value;
use tracing::{Instrument, debug, error, info, info_span};

use crate::domain::{
    FunctionResponse, InvocationContext, InvocationError, OBJECT_CONTENT_TYPE, OutputObject,
    STREAM_PARTITION_KEY, Step, StreamPayload, SuccessBody, TableItem,
};
use crate::ports::{BlobStore, ConfigSource, SecretStore, StreamSink, TableStore};

/// FanoutHandler は port を束ねた Handler
///
/// プロセスごとに 1 度だけ構築し、invocation 間で共有します（`HandlerBuilder` を使う）。
pub struct FanoutHandler {
    pub(super) config: Arc<dyn ConfigSource>,
    pub(super) secrets: Arc<dyn SecretStore>,
    pub(super) stream: Arc<dyn StreamSink>,
    pub(super) table: Arc<dyn TableStore>,
    pub(super) blobs: Arc<dyn BlobStore>,
}

impl FanoutHandler {
    /// invocation を処理して platform に返すレスポンスを作る
    ///
    /// `event` は受け取るだけで使わない。失敗はすべて 500 レスポンスに変換されるので、
    /// この関数自体はエラーを返さない。
    pub async fn handle(&self, _event: &Value, ctx: &InvocationContext) -> FunctionResponse {
        let span = info_span!(
            "invocation",
            request_id = ctx.request_id(),
            function_name = ctx.function_name()
        );

        async {
            match self.process(ctx).await {
                Ok(body) => {
                    info!("invocation succeeded");
                    FunctionResponse::success(&body)
                }
                Err(err) => {
                    error!(step = %err.step(), error = %err, "invocation failed");
                    FunctionResponse::failure(&err, ctx.request_id())
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn process(&self, ctx: &InvocationContext) -> Result<SuccessBody, InvocationError> {
        let config = self.config.load();

        // 1) Secret: parse するだけで値は使わない
        let secret_name = config.secret()?;
        let raw = self
            .secrets
            .get_secret_string(secret_name)
            .await
            .map_err(|source| InvocationError::Secret {
                name: secret_name.to_string(),
                source,
            })?;
        let _secret: Value =
            serde_json::from_str(&raw).map_err(|source| InvocationError::SecretDecode {
                name: secret_name.to_string(),
                source,
            })?;
        debug!(secret = secret_name, "secret loaded");

        // 2) Stream
        let stream = config.stream()?;
        let data = StreamPayload::for_invocation(ctx)
            .to_bytes()
            .map_err(|source| InvocationError::Encode {
                step: Step::Stream,
                source,
            })?;
        self.stream
            .put_record(stream, data, STREAM_PARTITION_KEY)
            .await
            .map_err(|source| InvocationError::Stream {
                stream: stream.to_string(),
                source,
            })?;
        debug!(stream, partition_key = STREAM_PARTITION_KEY, "record appended");

        // 3) Table
        let table = config.table()?;
        self.table
            .put_item(table, TableItem::for_invocation(ctx))
            .await
            .map_err(|source| InvocationError::Table {
                table: table.to_string(),
                source,
            })?;
        debug!(table, "item written");

        // 4) Object
        let bucket = config.bucket()?;
        let object = OutputObject::for_invocation(ctx);
        let key = object.key();
        let body = object.to_bytes().map_err(|source| InvocationError::Encode {
            step: Step::Object,
            source,
        })?;
        self.blobs
            .put_object(bucket, &key, body, OBJECT_CONTENT_TYPE)
            .await
            .map_err(|source| InvocationError::Object {
                bucket: bucket.to_string(),
                key: key.clone(),
                source,
            })?;
        debug!(bucket, key = %key, "object stored");

        Ok(SuccessBody::new(ctx.request_id(), bucket, table, stream))
    }
}

//! StreamSink port - append-only stream への追記（Kinesis）

use async_trait::async_trait;

use super::PortError;

/// StreamSink は 1 件のレコードを stream に追記する
///
/// ack の中身（sequence number など）は使わないので返さない。
#[async_trait]
pub trait StreamSink: Send + Sync {
    async fn put_record(
        &self,
        stream_name: &str,
        data: Vec<u8>,
        partition_key: &str,
    ) -> Result<(), PortError>;
}

use std::sync::Mutex;

use async_trait::async_trait;

use super::{FailureSlot, reject_empty};
use crate::ports::{PortError, StreamSink};

/// 追記されたレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamRecord {
    pub stream_name: String,
    pub partition_key: String,
    pub data: Vec<u8>,
}

/// InMemoryStream は追記順にレコードを保持する
#[derive(Debug, Default)]
pub struct InMemoryStream {
    records: Mutex<Vec<StreamRecord>>,
    failure: FailureSlot,
}

impl InMemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<StreamRecord> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn fail_next(&self, err: PortError) {
        self.failure.arm(err);
    }
}

#[async_trait]
impl StreamSink for InMemoryStream {
    async fn put_record(
        &self,
        stream_name: &str,
        data: Vec<u8>,
        partition_key: &str,
    ) -> Result<(), PortError> {
        self.failure.take()?;
        reject_empty("stream name", stream_name)?;
        reject_empty("partition key", partition_key)?;
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(StreamRecord {
                stream_name: stream_name.to_string(),
                partition_key: partition_key.to_string(),
                data,
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keeps_records_in_append_order() {
        let stream = InMemoryStream::new();
        stream.put_record("s", b"1".to_vec(), "p").await.unwrap();
        stream.put_record("s", b"2".to_vec(), "p").await.unwrap();

        let data: Vec<Vec<u8>> = stream.records().into_iter().map(|r| r.data).collect();
        assert_eq!(data, vec![b"1".to_vec(), b"2".to_vec()]);
    }

    #[tokio::test]
    async fn injected_failure_records_nothing() {
        let stream = InMemoryStream::new();
        stream.fail_next(PortError::Service("down".into()));

        assert!(stream.put_record("s", vec![], "p").await.is_err());
        assert!(stream.records().is_empty());
        assert!(stream.put_record("s", vec![], "p").await.is_ok());
    }
}

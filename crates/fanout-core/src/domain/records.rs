//! Records - 1 回の invocation で外部サービスに書き込むデータ
//!
//! request_id は Stream の `timestamp`、Table の `id` / `timestamp`、
//! Object key の suffix として使い回されます（3 つの書き込みを緩く対応付ける）。

use serde::Serialize;
use std::collections::BTreeMap;

use super::InvocationContext;

/// すべての invocation が同じ partition に流れる
pub const STREAM_PARTITION_KEY: &str = "lambda-partition";

pub const OBJECT_KEY_PREFIX: &str = "lambda-outputs/";

pub const OBJECT_CONTENT_TYPE: &str = "application/json";

const STREAM_MESSAGE: &str = "Hello from Lambda";
const TABLE_MESSAGE: &str = "Lambda execution";
pub(crate) const PROCESSED_MESSAGE: &str = "Successfully processed";

/// Stream に追記するレコードの payload
///
/// `timestamp` は互換性のためにこの名前のまま残しているが、中身は request_id。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamPayload<'a> {
    pub message: &'static str,
    pub timestamp: &'a str,
}

impl<'a> StreamPayload<'a> {
    pub fn for_invocation(ctx: &'a InvocationContext) -> Self {
        Self {
            message: STREAM_MESSAGE,
            timestamp: ctx.request_id(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Table に upsert する item（属性はすべて文字列）
///
/// BTreeMap なので属性の順序は安定している。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableItem {
    attributes: BTreeMap<String, String>,
}

impl TableItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// 属性を追加（同名の属性は上書き）
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn for_invocation(ctx: &InvocationContext) -> Self {
        Self::new()
            .with("id", ctx.request_id())
            .with("message", TABLE_MESSAGE)
            .with("timestamp", ctx.request_id().to_string())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Blob storage に保存する処理結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputObject<'a> {
    pub function_name: &'a str,
    pub request_id: &'a str,
    pub message: &'static str,
}

impl<'a> OutputObject<'a> {
    pub fn for_invocation(ctx: &'a InvocationContext) -> Self {
        Self {
            function_name: ctx.function_name(),
            request_id: ctx.request_id(),
            message: PROCESSED_MESSAGE,
        }
    }

    /// `lambda-outputs/{request_id}.json`
    pub fn key(&self) -> String {
        format!("{OBJECT_KEY_PREFIX}{}.json", self.request_id)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn ctx() -> InvocationContext {
        InvocationContext::new("abc-123", "demoFn")
    }

    #[test]
    fn stream_payload_carries_request_id_as_timestamp() {
        let ctx = ctx();
        let bytes = StreamPayload::for_invocation(&ctx).to_bytes().unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!({ "message": "Hello from Lambda", "timestamp": "abc-123" })
        );
    }

    #[test]
    fn table_item_duplicates_request_id() {
        let item = TableItem::for_invocation(&ctx());
        assert_eq!(item.len(), 3);
        assert_eq!(item.get("id"), Some("abc-123"));
        assert_eq!(item.get("timestamp"), Some("abc-123"));
        assert_eq!(item.get("message"), Some("Lambda execution"));
    }

    #[test]
    fn table_item_serializes_as_flat_map() {
        let item = TableItem::new().with("id", "x");
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({ "id": "x" }));
    }

    #[test]
    fn table_item_with_overwrites_existing_attribute() {
        let item = TableItem::new().with("id", "a").with("id", "b");
        assert_eq!(item.len(), 1);
        assert_eq!(item.get("id"), Some("b"));
    }

    #[test]
    fn output_object_key_and_body() {
        let ctx = ctx();
        let object = OutputObject::for_invocation(&ctx);
        assert_eq!(object.key(), "lambda-outputs/abc-123.json");

        let body: Value = serde_json::from_slice(&object.to_bytes().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "function_name": "demoFn",
                "request_id": "abc-123",
                "message": "Successfully processed"
            })
        );
    }

    #[test]
    fn output_object_fields_keep_declaration_order() {
        let ctx = ctx();
        let bytes = OutputObject::for_invocation(&ctx).to_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let fn_pos = text.find("function_name").unwrap();
        let id_pos = text.find("request_id").unwrap();
        let msg_pos = text.find("message").unwrap();
        assert!(fn_pos < id_pos && id_pos < msg_pos);
    }
}

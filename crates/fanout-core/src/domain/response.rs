//! Response - platform に返す 200 / 500 レスポンス

use serde::{Deserialize, Serialize};

use super::InvocationError;
use super::records::PROCESSED_MESSAGE;

/// platform に返すレスポンス
///
/// `body` はネストしたオブジェクトではなく、JSON にエンコード済みの文字列。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// 200 レスポンスの body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessBody {
    pub message: String,
    pub request_id: String,
    pub bucket: String,
    pub table: String,
    pub stream: String,
}

/// 500 レスポンスの body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureBody {
    pub error: String,
    pub request_id: String,
}

impl SuccessBody {
    pub fn new(
        request_id: impl Into<String>,
        bucket: impl Into<String>,
        table: impl Into<String>,
        stream: impl Into<String>,
    ) -> Self {
        Self {
            message: PROCESSED_MESSAGE.to_string(),
            request_id: request_id.into(),
            bucket: bucket.into(),
            table: table.into(),
            stream: stream.into(),
        }
    }
}

impl FunctionResponse {
    pub const OK: u16 = 200;
    pub const INTERNAL_ERROR: u16 = 500;

    pub fn success(body: &SuccessBody) -> Self {
        Self {
            status_code: Self::OK,
            body: encode_body(body),
        }
    }

    pub fn failure(err: &InvocationError, request_id: &str) -> Self {
        let body = FailureBody {
            error: err.to_string(),
            request_id: request_id.to_string(),
        };
        Self {
            status_code: Self::INTERNAL_ERROR,
            body: encode_body(&body),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == Self::OK
    }

    /// body を型付きで読み直す（テストやローカル実行用）
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

// エンコードに失敗しても body は JSON のまま
fn encode_body<T: Serialize>(body: &T) -> String {
    serde_json::to_string(body).unwrap_or_else(|e| {
        serde_json::json!({ "error": format!("failed to encode response body: {e}") }).to_string()
    })
}

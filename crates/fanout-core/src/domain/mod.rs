//! Domain - ドメインモデル
//!
//! - context: プラットフォームから渡される InvocationContext
//! - config: 環境変数から読むリソース名
//! - records: 外部サービスに書き込むデータ
//! - response: platform に返すレスポンス
//! - errors: step 付きのエラー

pub mod context;
pub mod config;
pub mod records;
pub mod response;
pub mod errors;

pub use self::context::InvocationContext;
pub use self::config::Config;
pub use self::records::{
    OutputObject, StreamPayload, TableItem, OBJECT_CONTENT_TYPE, OBJECT_KEY_PREFIX,
    STREAM_PARTITION_KEY,
};
pub use self::response::{FailureBody, FunctionResponse, SuccessBody};
pub use self::errors::{InvocationError, Step};

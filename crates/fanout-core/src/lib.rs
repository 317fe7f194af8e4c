//! fanout-core
//!
//! 1 回の invocation で Secret 取得 → Stream 追記 → Table 書き込み → Object 保存 を
//! 順番に実行する Handler の本体です。
//!
//! # モジュール構成
//! - **domain**: InvocationContext, Config, 書き込むレコード, レスポンス, エラー
//! - **ports**: 外部サービスの抽象化（SecretStore, StreamSink, TableStore, BlobStore, ConfigSource, Clock, RequestIdGenerator）
//! - **app**: FanoutHandler / HandlerBuilder
//! - **impls**: 開発・テスト用の InMemory 実装

pub mod domain;
pub mod ports;
pub mod app;
pub mod impls;

pub use app::{FanoutHandler, HandlerBuilder};
pub use domain::{Config, FunctionResponse, InvocationContext, InvocationError, Step};

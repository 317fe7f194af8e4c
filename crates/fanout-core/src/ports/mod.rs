//! Ports - 外部サービスへの抽象化レイヤー
//!
//! Handler は具体的な SDK を知らず、ここで定義する trait だけに依存します。
//! 本番用の AWS 実装は `fanout-lambda`、開発用の InMemory 実装は `crate::impls` にあります。
//!
//! # 設計原則
//! - すべて `Send + Sync`（プロセス内で 1 度だけ構築し、invocation 間で共有する）
//! - 失敗は `PortError` で返す（リトライはしない）

pub mod error;
pub mod secret_store;
pub mod stream_sink;
pub mod table_store;
pub mod blob_store;
pub mod config_source;
pub mod clock;
pub mod id_generator;

// 主要な trait を再エクスポート
pub use self::error::PortError;
pub use self::secret_store::SecretStore;
pub use self::stream_sink::StreamSink;
pub use self::table_store::TableStore;
pub use self::blob_store::BlobStore;
pub use self::config_source::{ConfigSource, EnvConfigSource, StaticConfigSource};
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{RequestIdGenerator, UlidGenerator};

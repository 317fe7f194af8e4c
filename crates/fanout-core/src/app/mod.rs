//! App - アプリケーション層
//!
//! ports を組み合わせて invocation の処理を実装します。
//!
//! # 主要コンポーネント
//! - **HandlerBuilder**: port のワイヤリングと起動時検証
//! - **FanoutHandler**: 1 回の invocation を処理する

pub mod builder;
pub mod handler;

pub use self::builder::{BuildError, HandlerBuilder};
pub use self::handler::FanoutHandler;

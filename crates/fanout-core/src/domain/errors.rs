//! Errors - invocation 失敗の分類
//!
//! 外部レスポンスは 200 / 500 の 2 種類だけですが、内部ではどの step で
//! 失敗したかを保持します。`Display` の文字列がそのまま 500 body の `error` になります。

use std::fmt;

use thiserror::Error;

use crate::ports::PortError;

/// Handler の処理 step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Config,
    Secret,
    Stream,
    Table,
    Object,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Config => "config",
            Step::Secret => "secret",
            Step::Stream => "stream",
            Step::Table => "table",
            Step::Object => "object",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// InvocationError は最初に失敗した step とその原因
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("environment variable {var} is not set (needed by {needed_by} step)")]
    MissingConfig { var: &'static str, needed_by: Step },

    #[error("failed to fetch secret {name}: {source}")]
    Secret {
        name: String,
        #[source]
        source: PortError,
    },

    #[error("secret {name} is not valid JSON: {source}")]
    SecretDecode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {step} payload: {source}")]
    Encode {
        step: Step,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to put record to stream {stream}: {source}")]
    Stream {
        stream: String,
        #[source]
        source: PortError,
    },

    #[error("failed to put item to table {table}: {source}")]
    Table {
        table: String,
        #[source]
        source: PortError,
    },

    #[error("failed to put object {key} to bucket {bucket}: {source}")]
    Object {
        bucket: String,
        key: String,
        #[source]
        source: PortError,
    },
}

impl InvocationError {
    /// 失敗した step
    ///
    /// 設定不足は、その値を必要とした step ではなく `Config` として扱う。
    pub fn step(&self) -> Step {
        match self {
            InvocationError::MissingConfig { .. } => Step::Config,
            InvocationError::Secret { .. } | InvocationError::SecretDecode { .. } => Step::Secret,
            InvocationError::Encode { step, .. } => *step,
            InvocationError::Stream { .. } => Step::Stream,
            InvocationError::Table { .. } => Step::Table,
            InvocationError::Object { .. } => Step::Object,
        }
    }
}

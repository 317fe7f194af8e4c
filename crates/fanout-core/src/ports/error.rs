use thiserror::Error;

/// PortError は外部サービス呼び出しの失敗
///
/// サービス固有のエラーコードは解釈せず、メッセージとして保持するだけ。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("service error: {0}")]
    Service(String),
}

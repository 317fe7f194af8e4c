//! SecretStore port - 名前付き Secret の読み出し（Secrets Manager）

use async_trait::async_trait;

use super::PortError;

/// SecretStore は Secret を名前で取得し、文字列のまま返す
///
/// 文字列表現を持たない Secret（バイナリ）は `PortError` として扱う。
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn get_secret_string(&self, name: &str) -> Result<String, PortError>;
}

//! Impls - port の InMemory 実装（開発・テスト用）
//!
//! # 共通の振る舞い
//! - 書き込みはすべて記録し、後から読み出せる
//! - 空のリソース名は managed service と同じく `PortError::Rejected`
//! - `fail_next()` で次の 1 回だけ失敗させられる

pub mod inmem_secrets;
pub mod inmem_stream;
pub mod inmem_table;
pub mod inmem_blob;

pub use self::inmem_secrets::InMemorySecretStore;
pub use self::inmem_stream::{InMemoryStream, StreamRecord};
pub use self::inmem_table::InMemoryTable;
pub use self::inmem_blob::{InMemoryBlobStore, StoredObject};

use std::sync::Mutex;

use crate::ports::PortError;

/// 次の 1 回だけ返す失敗
#[derive(Debug, Default)]
struct FailureSlot(Mutex<Option<PortError>>);

impl FailureSlot {
    fn arm(&self, err: PortError) {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = Some(err);
    }

    fn take(&self) -> Result<(), PortError> {
        match self.0.lock().unwrap_or_else(|e| e.into_inner()).take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn reject_empty(kind: &str, name: &str) -> Result<(), PortError> {
    if name.is_empty() {
        return Err(PortError::Rejected(format!("{kind} must not be empty")));
    }
    Ok(())
}

use std::sync::Mutex;

use async_trait::async_trait;

use super::{FailureSlot, reject_empty};
use crate::domain::TableItem;
use crate::ports::{PortError, TableStore};

/// InMemoryTable は put_item の呼び出しを (table, item) の列として記録する
///
/// upsert の意味論（同じ `id` の上書き）は再現せず、呼び出し履歴だけを残す。
#[derive(Debug, Default)]
pub struct InMemoryTable {
    items: Mutex<Vec<(String, TableItem)>>,
    failure: FailureSlot,
}

impl InMemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> Vec<(String, TableItem)> {
        self.items.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn fail_next(&self, err: PortError) {
        self.failure.arm(err);
    }
}

#[async_trait]
impl TableStore for InMemoryTable {
    async fn put_item(&self, table_name: &str, item: TableItem) -> Result<(), PortError> {
        self.failure.take()?;
        reject_empty("table name", table_name)?;
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((table_name.to_string(), item));
        Ok(())
    }
}

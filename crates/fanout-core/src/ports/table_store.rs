//! TableStore port - key-value table への upsert（DynamoDB）

use async_trait::async_trait;

use super::PortError;
use crate::domain::TableItem;

/// TableStore は item を丸ごと書き込む（同じ primary key は上書き）
#[async_trait]
pub trait TableStore: Send + Sync {
    async fn put_item(&self, table_name: &str, item: TableItem) -> Result<(), PortError>;
}

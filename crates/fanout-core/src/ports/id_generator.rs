//! RequestIdGenerator port - request_id の生成
//!
//! Lambda 上では request_id はプラットフォームが割り当てます。
//! ローカル実行ではこの port で代わりの ID を作ります。

use ulid::Ulid;

use super::Clock;

/// RequestIdGenerator は invocation ごとに一意な request_id を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数スレッドから使える）
pub trait RequestIdGenerator: Send + Sync {
    fn next_request_id(&self) -> String;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// Clock を使って現在時刻ベースの ULID を生成します。
/// テストでは FixedClock を渡すと timestamp 部分が固定されます。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn next_ulid(&self) -> Ulid {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        Ulid::from_parts(timestamp_ms, rand::random())
    }
}

impl<C: Clock> RequestIdGenerator for UlidGenerator<C> {
    fn next_request_id(&self) -> String {
        self.next_ulid().to_string().to_lowercase()
    }
}

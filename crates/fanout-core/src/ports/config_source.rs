//! ConfigSource port - invocation ごとの設定の読み出し

use crate::domain::Config;

/// ConfigSource は invocation の開始時に呼ばれ、その時点の Config を返す
///
/// 値の検証はしない。足りない値は、それを使う step で失敗する。
pub trait ConfigSource: Send + Sync {
    fn load(&self) -> Config;
}

/// EnvConfigSource はプロセスの環境変数を毎回読み直す
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigSource;

impl ConfigSource for EnvConfigSource {
    fn load(&self) -> Config {
        Config::from_env()
    }
}

/// StaticConfigSource は固定の Config を返す（テスト・ローカル実行用）
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    config: Config,
}

impl StaticConfigSource {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigSource for StaticConfigSource {
    fn load(&self) -> Config {
        self.config.clone()
    }
}

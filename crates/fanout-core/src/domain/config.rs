//! Config - 環境変数から読む 4 つのリソース名
//!
//! 起動時には検証しません。値が無い場合は、その値を必要とする step で
//! `InvocationError::MissingConfig` になります。空文字列はそのまま下流に渡します。

use std::ffi::OsStr;

use super::{InvocationError, Step};

pub const BUCKET_ENV: &str = "S3_BUCKET_NAME";
pub const TABLE_ENV: &str = "DYNAMODB_TABLE";
pub const STREAM_ENV: &str = "KINESIS_STREAM";
pub const SECRET_ENV: &str = "SECRET_NAME";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub bucket_name: Option<String>,
    pub table_name: Option<String>,
    pub stream_name: Option<String>,
    pub secret_name: Option<String>,
}

impl Config {
    /// 任意の lookup 関数から Config を作る
    ///
    /// # Example
    /// ```ignore
    /// let config = Config::from_lookup(|key| vars.get(key).cloned());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            bucket_name: lookup(BUCKET_ENV),
            table_name: lookup(TABLE_ENV),
            stream_name: lookup(STREAM_ENV),
            secret_name: lookup(SECRET_ENV),
        }
    }

    /// プロセスの環境変数から読む
    ///
    /// UTF-8 でない値も未設定にはせず、lossy 変換して下流に渡す。
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(|value| lossy(&value)))
    }

    pub fn bucket(&self) -> Result<&str, InvocationError> {
        require(&self.bucket_name, BUCKET_ENV, Step::Object)
    }

    pub fn table(&self) -> Result<&str, InvocationError> {
        require(&self.table_name, TABLE_ENV, Step::Table)
    }

    pub fn stream(&self) -> Result<&str, InvocationError> {
        require(&self.stream_name, STREAM_ENV, Step::Stream)
    }

    pub fn secret(&self) -> Result<&str, InvocationError> {
        require(&self.secret_name, SECRET_ENV, Step::Secret)
    }
}

fn lossy(value: &OsStr) -> String {
    value.to_string_lossy().into_owned()
}

fn require<'a>(
    value: &'a Option<String>,
    var: &'static str,
    needed_by: Step,
) -> Result<&'a str, InvocationError> {
    value
        .as_deref()
        .ok_or(InvocationError::MissingConfig { var, needed_by })
}

use std::sync::Arc;

use fanout_core::domain::config::{BUCKET_ENV, SECRET_ENV, STREAM_ENV, TABLE_ENV};
use fanout_core::impls::{InMemoryBlobStore, InMemorySecretStore, InMemoryStream, InMemoryTable};
use fanout_core::ports::{RequestIdGenerator, StaticConfigSource, SystemClock, UlidGenerator};
use fanout_core::{Config, HandlerBuilder, InvocationContext};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const FUNCTION_NAME: &str = "fanout-local";

/// 未設定の環境変数はローカル用の名前で埋める
fn local_config() -> Config {
    let mut config = Config::from_env();
    let defaults = [
        (&mut config.bucket_name, BUCKET_ENV, "local-bucket"),
        (&mut config.table_name, TABLE_ENV, "local-table"),
        (&mut config.stream_name, STREAM_ENV, "local-stream"),
        (&mut config.secret_name, SECRET_ENV, "local/secret"),
    ];
    for (slot, var, fallback) in defaults {
        if slot.is_none() {
            tracing::debug!(var, fallback, "using local default");
            *slot = Some(fallback.to_string());
        }
    }
    config
}

fn parse_event(arg: Option<String>) -> Result<Value, serde_json::Error> {
    match arg {
        Some(raw) => serde_json::from_str(&raw),
        None => Ok(serde_json::json!({})),
    }
}

/// in-memory の port で Handler を 1 回だけ実行し、結果と書き込み内容を表示する
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let event = parse_event(std::env::args().nth(1))?;
    let config = local_config();

    // (A) in-memory の port を用意（secret は JSON として parse されるだけ）
    let secrets = Arc::new(InMemorySecretStore::new());
    if let Some(name) = &config.secret_name {
        secrets.insert(name.clone(), r#"{"source":"fanout-cli"}"#);
    }
    let stream = Arc::new(InMemoryStream::new());
    let table = Arc::new(InMemoryTable::new());
    let blobs = Arc::new(InMemoryBlobStore::new());

    let handler = HandlerBuilder::new()
        .config_source(Arc::new(StaticConfigSource::new(config)))
        .secrets(secrets)
        .stream(stream.clone())
        .table(table.clone())
        .blobs(blobs.clone())
        .build()?;

    // (B) request_id はプラットフォームの代わりに ULID で作る
    let request_id = UlidGenerator::new(SystemClock).next_request_id();
    let ctx = InvocationContext::new(request_id, FUNCTION_NAME);

    // (C) 実行
    let response = handler.handle(&event, &ctx).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    // (D) 各 store に何が書き込まれたか
    for record in stream.records() {
        println!(
            "stream {} [{}]: {}",
            record.stream_name,
            record.partition_key,
            String::from_utf8_lossy(&record.data)
        );
    }
    for (table_name, item) in table.items() {
        println!("table {table_name}: {}", serde_json::to_string(&item)?);
    }
    for ((bucket, key), object) in blobs.objects() {
        println!(
            "object {bucket}/{key} ({}): {}",
            object.content_type,
            String::from_utf8_lossy(&object.body)
        );
    }

    if !response.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

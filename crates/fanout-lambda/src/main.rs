use std::sync::Arc;

use aws_config::BehaviorVersion;
use fanout_core::ports::EnvConfigSource;
use fanout_core::{FanoutHandler, FunctionResponse, HandlerBuilder, InvocationContext};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

mod aws;

use aws::{DynamoTable, KinesisSink, S3BlobStore, SecretsManagerStore};

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::tracing::init_default_subscriber();

    // client はプロセスごとに 1 度だけ作り、invocation 間で使い回す
    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let handler = HandlerBuilder::new()
        .config_source(Arc::new(EnvConfigSource))
        .secrets(Arc::new(SecretsManagerStore::new(&shared_config)))
        .stream(Arc::new(KinesisSink::new(&shared_config)))
        .table(Arc::new(DynamoTable::new(&shared_config)))
        .blobs(Arc::new(S3BlobStore::new(&shared_config)))
        .build()?;

    tracing::info!("handler initialized");
    run(service_fn(|event: LambdaEvent<Value>| invoke(&handler, event))).await
}

/// Lambda の Context を InvocationContext に詰め替えて Handler を呼ぶ
///
/// 失敗も 500 レスポンスとして返すので、platform には常に Ok を返す。
async fn invoke(
    handler: &FanoutHandler,
    event: LambdaEvent<Value>,
) -> Result<FunctionResponse, Error> {
    let (payload, context) = event.into_parts();
    let ctx = InvocationContext::new(
        context.request_id.clone(),
        context.env_config.function_name.clone(),
    );
    Ok(handler.handle(&payload, &ctx).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanout_core::domain::{Config, FailureBody, SuccessBody};
    use fanout_core::impls::{InMemoryBlobStore, InMemorySecretStore, InMemoryStream, InMemoryTable};
    use fanout_core::ports::{PortError, StaticConfigSource};
    use lambda_runtime::Context;
    use serde_json::json;

    fn lambda_context(request_id: &str, function_name: &str) -> Context {
        // Context は #[non_exhaustive] なので struct 式では作れない
        let mut context = Context::default();
        context.request_id = request_id.to_string();
        context.env_config = Arc::new(lambda_runtime::Config {
            function_name: function_name.to_string(),
            ..Default::default()
        });
        context
    }

    fn config() -> Config {
        Config {
            bucket_name: Some("out-bucket".into()),
            table_name: Some("runs".into()),
            stream_name: Some("events".into()),
            secret_name: Some("app/creds".into()),
        }
    }

    fn handler(config: Config, blobs: Arc<InMemoryBlobStore>) -> FanoutHandler {
        let secrets = InMemorySecretStore::new();
        secrets.insert("app/creds", "{}");
        HandlerBuilder::new()
            .config_source(Arc::new(StaticConfigSource::new(config)))
            .secrets(Arc::new(secrets))
            .stream(Arc::new(InMemoryStream::new()))
            .table(Arc::new(InMemoryTable::new()))
            .blobs(blobs)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn lambda_context_reaches_response_and_object() {
        let blobs = Arc::new(InMemoryBlobStore::new());
        let handler = handler(config(), blobs.clone());
        let event = LambdaEvent::new(json!({}), lambda_context("abc-123", "demoFn"));

        let resp = invoke(&handler, event).await.unwrap();

        assert_eq!(resp.status_code, 200);
        let body: SuccessBody = resp.decode_body().unwrap();
        assert_eq!(body.request_id, "abc-123");

        let object = blobs.get("out-bucket", "lambda-outputs/abc-123.json").unwrap();
        let stored: Value = serde_json::from_slice(&object.body).unwrap();
        assert_eq!(stored["function_name"], json!("demoFn"));
        assert_eq!(stored["request_id"], json!("abc-123"));
    }

    #[tokio::test]
    async fn missing_config_is_returned_as_ok_500() {
        let handler = handler(Config::default(), Arc::new(InMemoryBlobStore::new()));
        let event = LambdaEvent::new(json!({}), lambda_context("abc-123", "demoFn"));

        let resp = invoke(&handler, event).await.unwrap();

        assert_eq!(resp.status_code, 500);
        let body: FailureBody = resp.decode_body().unwrap();
        assert_eq!(body.request_id, "abc-123");
        assert!(body.error.contains("SECRET_NAME"));
    }

    #[tokio::test]
    async fn failing_port_is_returned_as_ok_500() {
        let blobs = Arc::new(InMemoryBlobStore::new());
        blobs.fail_next(PortError::Service("access denied".into()));
        let handler = handler(config(), blobs.clone());
        let event = LambdaEvent::new(json!(null), lambda_context("req-9", "demoFn"));

        let resp = invoke(&handler, event).await.unwrap();

        assert_eq!(resp.status_code, 500);
        let body: FailureBody = resp.decode_body().unwrap();
        assert_eq!(body.request_id, "req-9");
        assert!(body.error.contains("access denied"));
        assert!(blobs.objects().is_empty());
    }
}

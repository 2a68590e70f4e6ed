// Shared stub transport for integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use bedrock_model_client::model::{BedrockTransport, ModelError, RawResponse};
use bedrock_model_client::types::ModelFilter;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const LLAMA_ID: &str = "meta.llama3-2-1b-instruct-v1:0";

type CatalogResponder = dyn Fn(&ModelFilter) -> Result<RawResponse, ModelError> + Send + Sync;
type InvokeResponder = dyn Fn(&str, &[u8]) -> Result<RawResponse, ModelError> + Send + Sync;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedInvoke {
    pub model_id: String,
    pub content_type: String,
    pub body: serde_json::Value,
}

/// Transport whose responses are produced by closures; every call is recorded.
#[derive(Clone)]
pub struct StubTransport {
    catalog: Arc<CatalogResponder>,
    invoke: Arc<InvokeResponder>,
    filters: Arc<Mutex<Vec<ModelFilter>>>,
    invocations: Arc<Mutex<Vec<RecordedInvoke>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(|_: &ModelFilter| Ok(RawResponse::ok(r#"{"modelSummaries":[]}"#))),
            invoke: Arc::new(|_: &str, _: &[u8]| Ok(RawResponse::new(500, "{}"))),
            filters: Arc::new(Mutex::new(Vec::new())),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_catalog(
        mut self,
        responder: impl Fn(&ModelFilter) -> Result<RawResponse, ModelError> + Send + Sync + 'static,
    ) -> Self {
        self.catalog = Arc::new(responder);
        self
    }

    pub fn with_invoke(
        mut self,
        responder: impl Fn(&str, &[u8]) -> Result<RawResponse, ModelError> + Send + Sync + 'static,
    ) -> Self {
        self.invoke = Arc::new(responder);
        self
    }

    /// Every invocation answers with the same status and body.
    pub fn replying(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::new().with_invoke(move |_, _| Ok(RawResponse::new(status, body.clone())))
    }

    pub async fn filters(&self) -> Vec<ModelFilter> {
        self.filters.lock().await.clone()
    }

    pub async fn invocations(&self) -> Vec<RecordedInvoke> {
        self.invocations.lock().await.clone()
    }
}

#[async_trait]
impl BedrockTransport for StubTransport {
    async fn list_foundation_models(
        &self,
        filter: &ModelFilter,
    ) -> Result<RawResponse, ModelError> {
        self.filters.lock().await.push(filter.clone());
        (self.catalog)(filter)
    }

    async fn invoke_model(
        &self,
        model_id: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<RawResponse, ModelError> {
        let parsed = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        self.invocations.lock().await.push(RecordedInvoke {
            model_id: model_id.to_string(),
            content_type: content_type.to_string(),
            body: parsed,
        });
        (self.invoke)(model_id, &body)
    }
}

//! reqwest-backed transport

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, header};
use tracing::debug;

use super::endpoints::ServiceEndpoints;
use crate::infrastructure::model::traits::{BedrockTransport, CredentialProvider};
use crate::infrastructure::model::types::{ModelError, RawResponse};
use crate::domain::types::ModelFilter;

/// Authenticated HTTPS client bound to one region's endpoints.
///
/// Certificate validation is always on.
#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
    endpoints: ServiceEndpoints,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpTransport {
    pub fn new(endpoints: ServiceEndpoints, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self::with_client(Client::new(), endpoints, credentials)
    }

    /// Use a preconfigured client (timeouts, proxies, extra root certificates).
    pub fn with_client(
        http: Client,
        endpoints: ServiceEndpoints,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            http,
            endpoints,
            credentials,
        }
    }

    async fn send(&self, target: &str, request: RequestBuilder) -> Result<RawResponse, ModelError> {
        let token = self.credentials.bearer_token()?;

        let response = request
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ModelError::network(target, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ModelError::network(target, e))?;
        debug!(endpoint = target, status, bytes = body.len(), "HTTP response received");

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl BedrockTransport for HttpTransport {
    async fn list_foundation_models(
        &self,
        filter: &ModelFilter,
    ) -> Result<RawResponse, ModelError> {
        let url = self.endpoints.catalog_url()?;
        let request = self.http.get(url).query(&filter.query_pairs());
        self.send(&self.endpoints.catalog, request).await
    }

    async fn invoke_model(
        &self,
        model_id: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<RawResponse, ModelError> {
        let url = self.endpoints.invoke_url(model_id)?;
        let request = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, content_type)
            .body(body);
        self.send(&self.endpoints.runtime, request).await
    }
}

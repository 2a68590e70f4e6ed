//! Foundation-model catalog client

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use super::traits::BedrockTransport;
use super::types::ModelError;
use crate::domain::types::{ModelDescriptor, ModelFilter};

const CATALOG_TARGET: &str = "model catalog";

/// Lists hosted models and their declared capabilities.
#[derive(Clone)]
pub struct ModelCatalogClient {
    transport: Arc<dyn BedrockTransport>,
}

impl ModelCatalogClient {
    pub fn new(transport: Arc<dyn BedrockTransport>) -> Self {
        Self { transport }
    }

    /// Every model in the catalog. An empty catalog is an empty vector.
    pub async fn list_models(&self) -> Result<Vec<ModelDescriptor>, ModelError> {
        self.list_models_filtered(&ModelFilter::default()).await
    }

    /// Models matching the service-side filter.
    pub async fn list_models_filtered(
        &self,
        filter: &ModelFilter,
    ) -> Result<Vec<ModelDescriptor>, ModelError> {
        info!(filters = filter.query_pairs().len(), "Loading models");

        let response = self.transport.list_foundation_models(filter).await?;
        if !response.is_success() {
            return Err(ModelError::from_status(
                response.status,
                &response.body,
                CATALOG_TARGET,
                None,
            ));
        }

        let catalog: CatalogPayload = serde_json::from_slice(&response.body)
            .map_err(|e| ModelError::malformed(CATALOG_TARGET, e.to_string()))?;
        let models = catalog.model_summaries.unwrap_or_default();
        debug!(count = models.len(), "Received model catalog");

        Ok(models)
    }

    /// Look a single model up by id.
    pub async fn find_model(&self, model_id: &str) -> Result<Option<ModelDescriptor>, ModelError> {
        Ok(self
            .list_models()
            .await?
            .into_iter()
            .find(|m| m.id == model_id))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogPayload {
    model_summaries: Option<Vec<ModelDescriptor>>,
}

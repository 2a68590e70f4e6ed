//! Service endpoints

use reqwest::Url;

use crate::config::AppConfig;
use crate::infrastructure::model::types::ModelError;

/// Base URLs of the control plane (catalog) and runtime (invocation) APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub catalog: String,
    pub runtime: String,
}

impl ServiceEndpoints {
    /// Public endpoints for a region
    pub fn for_region(region: &str) -> Self {
        Self {
            catalog: format!("https://bedrock.{region}.amazonaws.com"),
            runtime: format!("https://bedrock-runtime.{region}.amazonaws.com"),
        }
    }

    /// Region endpoints with any overrides from the configuration applied.
    pub fn from_config(config: &AppConfig) -> Self {
        let defaults = Self::for_region(&config.region);
        Self {
            catalog: config.catalog_endpoint.clone().unwrap_or(defaults.catalog),
            runtime: config.runtime_endpoint.clone().unwrap_or(defaults.runtime),
        }
    }

    pub fn catalog_url(&self) -> Result<Url, ModelError> {
        build_url(&self.catalog, &["foundation-models"])
    }

    /// Invocation URL; the model id (or ARN) stays a single path segment.
    pub fn invoke_url(&self, model_id: &str) -> Result<Url, ModelError> {
        build_url(&self.runtime, &["model", model_id, "invoke"])
    }
}

fn build_url(base: &str, segments: &[&str]) -> Result<Url, ModelError> {
    let mut url = Url::parse(base)
        .map_err(|e| ModelError::transport(base, format!("invalid endpoint URL: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| ModelError::transport(base, "endpoint URL cannot carry a path"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

use super::error::ConfigError;
use crate::constants::{DEFAULT_API_KEY_ENV, DEFAULT_MODEL_ID, DEFAULT_REGION};
use crate::domain::types::GenerationParams;
use std::path::Path;

/// Client configuration, passed explicitly to every component that needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub region: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub catalog_endpoint: Option<String>,
    pub runtime_endpoint: Option<String>,
    pub default_model: String,
    pub generation: GenerationParams,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            catalog_endpoint: None,
            runtime_endpoint: None,
            default_model: DEFAULT_MODEL_ID.to_string(),
            generation: GenerationParams::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Check the invariants the loader enforces; used again after CLI overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::EmptyRegion);
        }
        if self.api_key_env.trim().is_empty() {
            return Err(ConfigError::EmptyApiKeyEnv);
        }
        validate_generation(&self.generation)
    }
}

pub(super) fn validate_generation(params: &GenerationParams) -> Result<(), ConfigError> {
    params
        .validate()
        .map_err(|e| ConfigError::InvalidGeneration {
            field: e.field,
            value: e.value,
        })
}

//! Model traits

use super::types::{ModelError, RawResponse};
use crate::domain::types::{GenerationParams, ModelFilter};
use async_trait::async_trait;

/// Authenticated connection to the hosting service.
///
/// Implementations report connection failures as [`ModelError::Transport`] and
/// return every HTTP response, successful or not, as a [`RawResponse`].
#[async_trait]
pub trait BedrockTransport: Send + Sync {
    /// Fetch the raw foundation-model catalog
    async fn list_foundation_models(&self, filter: &ModelFilter)
    -> Result<RawResponse, ModelError>;

    /// Send one invocation body to a model
    async fn invoke_model(
        &self,
        model_id: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<RawResponse, ModelError>;
}

/// Source of the bearer credential attached to outbound calls.
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Result<String, ModelError>;
}

/// Wraps a raw user message in a provider's turn delimiters.
pub trait PromptFormatter: Send + Sync {
    fn format(&self, message: &str) -> String;
}

/// Translates between the canonical request/response and one provider's payloads.
///
/// Codecs are pure: no I/O, no state carried between calls.
pub trait ProviderCodec: Send + Sync {
    /// Registry key, e.g. `meta`
    fn provider(&self) -> &str;

    fn encode_request(&self, prompt: &str, params: &GenerationParams)
    -> Result<Vec<u8>, serde_json::Error>;

    /// Extract the generated text; `Err` carries the reason decoding failed.
    fn decode_response(&self, body: &[u8]) -> Result<String, String>;
}

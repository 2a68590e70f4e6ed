//! Meta Llama codec

use serde::{Deserialize, Serialize};

use super::decode_json;
use crate::domain::types::GenerationParams;
use crate::infrastructure::model::prompt::Llama3ChatFormat;
use crate::infrastructure::model::traits::{PromptFormatter, ProviderCodec};

/// Llama request/response shape: `prompt` in, `generation` out.
pub struct LlamaCodec {
    formatter: Box<dyn PromptFormatter>,
}

impl LlamaCodec {
    pub fn new() -> Self {
        Self::with_formatter(Llama3ChatFormat::new())
    }

    pub fn with_formatter(formatter: impl PromptFormatter + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
        }
    }
}

impl Default for LlamaCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderCodec for LlamaCodec {
    fn provider(&self) -> &str {
        "meta"
    }

    fn encode_request(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&LlamaRequest {
            prompt: self.formatter.format(prompt),
            max_gen_len: params.max_gen_len,
            temperature: params.temperature,
            top_p: params.top_p,
        })
    }

    fn decode_response(&self, body: &[u8]) -> Result<String, String> {
        let response: LlamaResponse = decode_json(body)?;
        response
            .generation
            .ok_or_else(|| "missing 'generation' field".to_string())
    }
}

#[derive(Serialize)]
struct LlamaRequest {
    prompt: String,
    max_gen_len: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize)]
struct LlamaResponse {
    generation: Option<String>,
}

//! Mistral codec

use serde::{Deserialize, Serialize};

use super::decode_json;
use crate::domain::types::GenerationParams;
use crate::infrastructure::model::prompt::MistralInstructFormat;
use crate::infrastructure::model::traits::{PromptFormatter, ProviderCodec};

pub struct MistralCodec {
    formatter: Box<dyn PromptFormatter>,
}

impl MistralCodec {
    pub fn new() -> Self {
        Self::with_formatter(MistralInstructFormat)
    }

    pub fn with_formatter(formatter: impl PromptFormatter + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
        }
    }
}

impl Default for MistralCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderCodec for MistralCodec {
    fn provider(&self) -> &str {
        "mistral"
    }

    fn encode_request(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&MistralRequest {
            prompt: self.formatter.format(prompt),
            max_tokens: params.max_gen_len,
            temperature: params.temperature,
            top_p: params.top_p,
        })
    }

    fn decode_response(&self, body: &[u8]) -> Result<String, String> {
        let response: MistralResponse = decode_json(body)?;
        response
            .outputs
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|o| o.text)
            .ok_or_else(|| "missing 'outputs[0].text' field".to_string())
    }
}

#[derive(Serialize)]
struct MistralRequest {
    prompt: String,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize)]
struct MistralResponse {
    outputs: Option<Vec<MistralOutput>>,
}

#[derive(Deserialize)]
struct MistralOutput {
    text: Option<String>,
}

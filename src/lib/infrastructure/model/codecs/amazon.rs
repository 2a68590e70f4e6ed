//! Amazon Titan text codec

use serde::{Deserialize, Serialize};

use super::decode_json;
use crate::domain::types::GenerationParams;
use crate::infrastructure::model::prompt::PlainPrompt;
use crate::infrastructure::model::traits::{PromptFormatter, ProviderCodec};

/// Titan payloads: `inputText` in, `results[0].outputText` out.
pub struct TitanCodec {
    formatter: Box<dyn PromptFormatter>,
}

impl TitanCodec {
    pub fn new() -> Self {
        Self::with_formatter(PlainPrompt)
    }

    pub fn with_formatter(formatter: impl PromptFormatter + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
        }
    }
}

impl Default for TitanCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderCodec for TitanCodec {
    fn provider(&self) -> &str {
        "amazon"
    }

    fn encode_request(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&TitanRequest {
            input_text: self.formatter.format(prompt),
            text_generation_config: TitanGenerationConfig {
                max_token_count: params.max_gen_len,
                temperature: params.temperature,
                top_p: params.top_p,
            },
        })
    }

    fn decode_response(&self, body: &[u8]) -> Result<String, String> {
        let response: TitanResponse = decode_json(body)?;
        response
            .results
            .unwrap_or_default()
            .into_iter()
            .find_map(|r| r.output_text)
            .ok_or_else(|| "missing 'results[].outputText' field".to_string())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanRequest {
    input_text: String,
    text_generation_config: TitanGenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanGenerationConfig {
    max_token_count: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize)]
struct TitanResponse {
    results: Option<Vec<TitanResult>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TitanResult {
    output_text: Option<String>,
}

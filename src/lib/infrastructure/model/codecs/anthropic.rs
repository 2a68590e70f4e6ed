//! Anthropic Claude codec (messages API)

use serde::{Deserialize, Serialize};

use super::decode_json;
use crate::domain::types::GenerationParams;
use crate::infrastructure::model::prompt::PlainPrompt;
use crate::infrastructure::model::traits::{PromptFormatter, ProviderCodec};

const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Claude payloads: a single user message in, text content blocks out.
pub struct AnthropicCodec {
    formatter: Box<dyn PromptFormatter>,
}

impl AnthropicCodec {
    pub fn new() -> Self {
        Self::with_formatter(PlainPrompt)
    }

    pub fn with_formatter(formatter: impl PromptFormatter + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
        }
    }
}

impl Default for AnthropicCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderCodec for AnthropicCodec {
    fn provider(&self) -> &str {
        "anthropic"
    }

    fn encode_request(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&AnthropicRequest {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens: params.max_gen_len,
            messages: vec![AnthropicMessage {
                role: "user",
                content: self.formatter.format(prompt),
            }],
            temperature: params.temperature,
            top_p: params.top_p,
        })
    }

    fn decode_response(&self, body: &[u8]) -> Result<String, String> {
        let response: AnthropicResponse = decode_json(body)?;
        let blocks = response
            .content
            .ok_or_else(|| "missing 'content' field".to_string())?;

        let text: Vec<String> = blocks
            .into_iter()
            .filter(|b| b.kind == "text")
            .filter_map(|b| b.text)
            .collect();
        if text.is_empty() {
            return Err("no text content block".to_string());
        }
        Ok(text.join(""))
    }
}

#[derive(Serialize)]
struct AnthropicRequest {
    anthropic_version: &'static str,
    max_tokens: u32,
    messages: Vec<AnthropicMessage>,
    temperature: f32,
    top_p: f32,
}

#[derive(Serialize)]
struct AnthropicMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Option<Vec<AnthropicBlock>>,
}

#[derive(Deserialize)]
struct AnthropicBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn encodes_messages_payload() {
        let params = GenerationParams {
            max_gen_len: 256,
            temperature: 0.25,
            top_p: 1.0,
        };
        let body = AnthropicCodec::new()
            .encode_request("Describe X.", &params)
            .expect("encode");
        let value: Value = serde_json::from_slice(&body).expect("json");

        assert_eq!(value["anthropic_version"], ANTHROPIC_VERSION);
        assert_eq!(value["max_tokens"], 256);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Describe X.");
        assert_eq!(value["temperature"].as_f64(), Some(0.25));
    }

    #[test]
    fn joins_text_blocks_and_skips_others() {
        let body = br#"{"content":[
            {"type":"text","text":"X is "},
            {"type":"tool_use","id":"t1"},
            {"type":"text","text":"a letter."}
        ],"stop_reason":"end_turn"}"#;
        assert_eq!(
            AnthropicCodec::new().decode_response(body).expect("decode"),
            "X is a letter."
        );
    }

    #[test]
    fn rejects_payload_without_text_blocks() {
        assert!(AnthropicCodec::new().decode_response(br#"{"content":[]}"#).is_err());
        assert!(AnthropicCodec::new().decode_response(br#"{"generation":"x"}"#).is_err());
    }
}

//! Provider codecs
//!
//! One module per provider payload family. Every codec carries a swappable
//! [`PromptFormatter`](super::traits::PromptFormatter).

mod amazon;
mod anthropic;
mod meta;
mod mistral;

pub use amazon::TitanCodec;
pub use anthropic::AnthropicCodec;
pub use meta::LlamaCodec;
pub use mistral::MistralCodec;

use serde::de::DeserializeOwned;

/// Decode a JSON body into a provider response shape, keeping the serde reason.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, String> {
    serde_json::from_slice(body).map_err(|e| format!("invalid JSON payload: {e}"))
}

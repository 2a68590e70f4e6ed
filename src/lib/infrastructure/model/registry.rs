//! Codec registry - maps provider keys to payload codecs

use std::collections::HashMap;
use std::sync::Arc;

use super::codecs::{AnthropicCodec, LlamaCodec, MistralCodec, TitanCodec};
use super::traits::ProviderCodec;
use crate::constants::INFERENCE_PROFILE_PREFIXES;

/// ARN resource types whose resource id is a vendor-prefixed model id.
const VENDOR_RESOURCE_TYPES: &[&str] = &["foundation-model", "inference-profile"];

/// Derive the provider key from a model id.
///
/// `meta.llama3-2-1b-instruct-v1:0` → `meta`; cross-region inference profiles
/// such as `eu.anthropic.claude-3-haiku-20240307-v1:0` drop the geography
/// prefix first. ARNs are reduced to their resource id; resource types that
/// carry no vendor (provisioned models, application inference profiles) and
/// ids without a vendor segment yield `None`.
pub fn provider_key(model_id: &str) -> Option<String> {
    let id = if model_id.starts_with("arn:") {
        arn_resource_id(model_id)?
    } else {
        model_id
    };

    let mut segments = id.split('.');
    let first = segments.next()?.trim();
    let vendor = if INFERENCE_PROFILE_PREFIXES
        .iter()
        .any(|p| p.eq_ignore_ascii_case(first))
    {
        segments.next()?.trim()
    } else {
        first
    };
    // The model name must follow the vendor segment.
    segments.next()?;

    if vendor.is_empty() || vendor.contains(['/', ':']) {
        return None;
    }
    Some(vendor.to_ascii_lowercase())
}

/// `arn:partition:service:region:account:type/id` → `id`, for vendor-bearing types.
fn arn_resource_id(arn: &str) -> Option<&str> {
    let resource = arn.splitn(6, ':').nth(5)?;
    let (resource_type, id) = resource.split_once('/')?;
    VENDOR_RESOURCE_TYPES
        .contains(&resource_type)
        .then_some(id)
}

/// Provider-key → codec table. Extending it never touches the invoker.
#[derive(Clone, Default)]
pub struct CodecRegistry {
    codecs: HashMap<String, Arc<dyn ProviderCodec>>,
    aliases: HashMap<String, String>,
}

impl CodecRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the Meta, Anthropic, Amazon and Mistral codecs.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_codec(LlamaCodec::new())
            .with_codec(AnthropicCodec::new())
            .with_codec(TitanCodec::new())
            .with_codec(MistralCodec::new())
    }

    pub fn with_codec(mut self, codec: impl ProviderCodec + 'static) -> Self {
        self.register(Arc::new(codec));
        self
    }

    /// Register a codec under its own provider key, replacing any previous one.
    pub fn register(&mut self, codec: Arc<dyn ProviderCodec>) {
        let key = codec.provider().to_ascii_lowercase();
        self.codecs.insert(key, codec);
    }

    /// Route an extra key (e.g. a display provider name) to a registered codec.
    pub fn alias(&mut self, alias: impl Into<String>, provider: impl Into<String>) {
        self.aliases.insert(
            alias.into().to_ascii_lowercase(),
            provider.into().to_ascii_lowercase(),
        );
    }

    /// Look up a codec by provider key (case-insensitive, aliases followed once).
    pub fn get(&self, key: &str) -> Option<Arc<dyn ProviderCodec>> {
        let key = key.to_ascii_lowercase();
        let key = self.aliases.get(&key).unwrap_or(&key);
        self.codecs.get(key).cloned()
    }

    /// Look up the codec for a model id via [`provider_key`].
    pub fn for_model(&self, model_id: &str) -> Option<Arc<dyn ProviderCodec>> {
        provider_key(model_id).and_then(|key| self.get(&key))
    }

    /// Registered provider keys, sorted
    pub fn providers(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.codecs.keys().cloned().collect();
        keys.sort();
        keys
    }
}

//! Canonical value types shared by the catalog and the invoker.
//!
//! Everything here is plain data: descriptors are produced by a listing call,
//! requests and responses live for exactly one invocation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Metadata describing one hosted foundation model.
///
/// Field names follow the service's `modelSummaries` entries so that a catalog
/// payload deserializes straight into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Stable identifier used when invoking the model
    #[serde(rename = "modelId")]
    pub id: String,
    #[serde(rename = "modelName", default)]
    pub name: String,
    #[serde(rename = "providerName", default)]
    pub provider: String,
    #[serde(rename = "modelArn", default)]
    pub arn: String,
    #[serde(default)]
    pub input_modalities: Vec<String>,
    #[serde(default)]
    pub output_modalities: Vec<String>,
    #[serde(default)]
    pub customizations_supported: Vec<String>,
    #[serde(default)]
    pub inference_types_supported: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_streaming_supported: Option<bool>,
    #[serde(
        rename = "modelLifecycle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub lifecycle: Option<ModelLifecycle>,
}

impl ModelDescriptor {
    /// Whether the model accepts the given input modality (case-insensitive).
    pub fn accepts(&self, modality: &str) -> bool {
        self.input_modalities
            .iter()
            .any(|m| m.eq_ignore_ascii_case(modality))
    }

    /// Whether the model produces the given output modality (case-insensitive).
    pub fn produces(&self, modality: &str) -> bool {
        self.output_modalities
            .iter()
            .any(|m| m.eq_ignore_ascii_case(modality))
    }
}

/// Lifecycle block attached to a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelLifecycle {
    pub status: String,
}

/// Server-side filters accepted by the catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelFilter {
    pub provider: Option<String>,
    pub output_modality: Option<String>,
    pub inference_type: Option<String>,
    pub customization_type: Option<String>,
}

impl ModelFilter {
    pub fn by_provider(provider: impl Into<String>) -> Self {
        Self {
            provider: Some(provider.into()),
            ..Self::default()
        }
    }

    pub fn with_output_modality(mut self, modality: impl Into<String>) -> Self {
        self.output_modality = Some(modality.into());
        self
    }

    pub fn with_inference_type(mut self, inference_type: impl Into<String>) -> Self {
        self.inference_type = Some(inference_type.into());
        self
    }

    pub fn with_customization_type(mut self, customization: impl Into<String>) -> Self {
        self.customization_type = Some(customization.into());
        self
    }

    /// Query pairs in the service's parameter naming, skipping unset filters.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("byProvider", self.provider.as_deref()),
            ("byOutputModality", self.output_modality.as_deref()),
            ("byInferenceType", self.inference_type.as_deref()),
            ("byCustomizationType", self.customization_type.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Sampling parameters for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Upper bound on generated tokens
    pub max_gen_len: u32,
    /// Sampling temperature in `[0, 1]`
    pub temperature: f32,
    /// Nucleus-sampling threshold in `[0, 1]`
    pub top_p: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_gen_len: 512,
            temperature: 0.5,
            top_p: 0.9,
        }
    }
}

impl GenerationParams {
    /// Reject values the service would refuse: zero length, or a temperature
    /// or `top_p` outside `[0, 1]` (NaN included).
    pub fn validate(&self) -> Result<(), ParamRangeError> {
        if self.max_gen_len == 0 {
            return Err(ParamRangeError {
                field: "max_gen_len",
                value: self.max_gen_len.to_string(),
            });
        }
        for (field, value) in [("temperature", self.temperature), ("top_p", self.top_p)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamRangeError {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A generation parameter outside its accepted range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("generation parameter '{field}' is out of range: {value}")]
pub struct ParamRangeError {
    pub field: &'static str,
    pub value: String,
}

/// One invocation: which model, what to say, how to sample.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    pub model_id: String,
    pub prompt: String,
    pub params: GenerationParams,
}

impl InvocationRequest {
    pub fn new(
        model_id: impl Into<String>,
        prompt: impl Into<String>,
        params: GenerationParams,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            prompt: prompt.into(),
            params,
        }
    }
}

/// Decoded result of one invocation, keeping the raw payload alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationResponse {
    pub model_id: String,
    pub raw: Vec<u8>,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_decodes_service_field_names() {
        let payload = r#"{
            "modelId": "meta.llama3-2-1b-instruct-v1:0",
            "modelName": "Llama 3.2 1B Instruct",
            "providerName": "Meta",
            "modelArn": "arn:aws:bedrock:eu-west-1::foundation-model/meta.llama3-2-1b-instruct-v1:0",
            "inputModalities": ["TEXT"],
            "outputModalities": ["TEXT"],
            "customizationsSupported": [],
            "inferenceTypesSupported": ["INFERENCE_PROFILE"],
            "responseStreamingSupported": true,
            "modelLifecycle": {"status": "ACTIVE"}
        }"#;

        let descriptor: ModelDescriptor = serde_json::from_str(payload).expect("decode");
        assert_eq!(descriptor.id, "meta.llama3-2-1b-instruct-v1:0");
        assert_eq!(descriptor.provider, "Meta");
        assert!(descriptor.accepts("text"));
        assert!(descriptor.produces("TEXT"));
        assert!(descriptor.customizations_supported.is_empty());
        assert_eq!(descriptor.inference_types_supported, vec!["INFERENCE_PROFILE"]);
        assert_eq!(descriptor.response_streaming_supported, Some(true));
        assert_eq!(
            descriptor.lifecycle.map(|l| l.status),
            Some("ACTIVE".to_string())
        );
    }

    #[test]
    fn descriptor_tolerates_missing_optional_sets() {
        let descriptor: ModelDescriptor =
            serde_json::from_str(r#"{"modelId": "amazon.titan-text-lite-v1"}"#).expect("decode");
        assert!(descriptor.input_modalities.is_empty());
        assert!(descriptor.inference_types_supported.is_empty());
        assert!(descriptor.lifecycle.is_none());
    }

    #[test]
    fn generation_params_range_checks() {
        assert!(GenerationParams::default().validate().is_ok());

        let hot = GenerationParams {
            temperature: 1.5,
            ..GenerationParams::default()
        };
        assert_eq!(hot.validate().unwrap_err().field, "temperature");

        let nan = GenerationParams {
            top_p: f32::NAN,
            ..GenerationParams::default()
        };
        assert_eq!(nan.validate().unwrap_err().field, "top_p");

        let empty = GenerationParams {
            max_gen_len: 0,
            ..GenerationParams::default()
        };
        assert_eq!(empty.validate().unwrap_err().field, "max_gen_len");
    }

    #[test]
    fn filter_emits_only_set_pairs() {
        let filter = ModelFilter::by_provider("Meta").with_inference_type("ON_DEMAND");
        assert_eq!(
            filter.query_pairs(),
            vec![("byProvider", "Meta"), ("byInferenceType", "ON_DEMAND")]
        );
        assert!(ModelFilter::default().is_empty());
    }
}

//! Console rendering of catalog entries

use crate::domain::types::ModelDescriptor;

const RULE_WIDTH: usize = 42;

/// One descriptor as a framed console block.
pub fn render_descriptor(model: &ModelDescriptor) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&format!("{heavy}\n"));
    out.push_str(&format!(" Model: {}\n", model.id));
    out.push_str(&format!("{light}\n"));
    out.push_str(&format!(" Name: {}\n", model.name));
    out.push_str(&format!(" Provider: {}\n", model.provider));
    out.push_str(&format!(" Model ARN: {}\n", model.arn));
    out.push_str(&format!(
        " Input modalities: {}\n",
        model.input_modalities.join(",")
    ));
    out.push_str(&format!(
        " Output modalities: {}\n",
        model.output_modalities.join(",")
    ));
    out.push_str(&format!(
        " Supported customizations: {}\n",
        model.customizations_supported.join(",")
    ));
    out.push_str(&format!(
        " Supported inference types: {}\n",
        model.inference_types_supported.join(",")
    ));
    if let Some(lifecycle) = &model.lifecycle {
        out.push_str(&format!(" Lifecycle: {}\n", lifecycle.status));
    }
    out.push_str(&format!("{heavy}\n"));
    out
}

/// The whole listing, or `No models` for an empty catalog.
pub fn render_catalog(models: &[ModelDescriptor]) -> String {
    if models.is_empty() {
        return "No models\n".to_string();
    }
    models
        .iter()
        .map(render_descriptor)
        .collect::<Vec<_>>()
        .join("\n")
}

//! Prompt formatters - provider-specific turn delimiters

use super::traits::PromptFormatter;

/// Passes the message through untouched (providers with structured messages).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPrompt;

impl PromptFormatter for PlainPrompt {
    fn format(&self, message: &str) -> String {
        message.to_string()
    }
}

/// Llama 3 chat template: one user turn followed by an open assistant header.
#[derive(Debug, Clone, Default)]
pub struct Llama3ChatFormat {
    system: Option<String>,
}

impl Llama3ChatFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

impl PromptFormatter for Llama3ChatFormat {
    fn format(&self, message: &str) -> String {
        let mut prompt = String::from("<|begin_of_text|>");
        if let Some(system) = &self.system {
            prompt.push_str("<|start_header_id|>system<|end_header_id|>\n\n");
            prompt.push_str(system);
            prompt.push_str("<|eot_id|>");
        }
        prompt.push_str("<|start_header_id|>user<|end_header_id|>\n\n");
        prompt.push_str(message);
        prompt.push_str("<|eot_id|><|start_header_id|>assistant<|end_header_id|>\n\n");
        prompt
    }
}

/// Mistral instruct template
#[derive(Debug, Clone, Copy, Default)]
pub struct MistralInstructFormat;

impl PromptFormatter for MistralInstructFormat {
    fn format(&self, message: &str) -> String {
        format!("<s>[INST] {message} [/INST]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn llama3_wraps_message_in_turn_markers() {
        let prompt = Llama3ChatFormat::new().format("Describe X in one sentence.");
        assert!(prompt.starts_with("<|begin_of_text|><|start_header_id|>user<|end_header_id|>"));
        assert!(prompt.contains("Describe X in one sentence.<|eot_id|>"));
        assert!(prompt.ends_with("<|start_header_id|>assistant<|end_header_id|>\n\n"));
        assert!(!prompt.contains("system"));
    }

    #[test]
    fn llama3_system_turn_precedes_user_turn() {
        let prompt = Llama3ChatFormat::new().with_system("Be brief.").format("hi");
        let system_at = prompt.find("Be brief.").expect("system text");
        let user_at = prompt.find("user<|end_header_id|>").expect("user header");
        assert!(system_at < user_at);
    }

    #[test]
    fn mistral_and_plain() {
        assert_eq!(MistralInstructFormat.format("hi"), "<s>[INST] hi [/INST]");
        assert_eq!(PlainPrompt.format("hi"), "hi");
    }
}

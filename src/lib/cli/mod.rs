mod render;

pub use render::{render_descriptor, render_catalog};

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bedrock",
    version,
    about = "List and invoke foundation models hosted on Amazon Bedrock"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Override the configured region
    #[arg(long, global = true)]
    pub region: Option<String>,
    /// Disable log output
    #[arg(long, short, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List foundation models and their capabilities
    Models(ModelsArgs),
    /// Generate text with one model
    Invoke(InvokeArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ModelsArgs {
    /// Only models from this provider (e.g. Meta)
    #[arg(long)]
    pub provider: Option<String>,
    /// Only models producing this modality (TEXT, IMAGE, EMBEDDING)
    #[arg(long)]
    pub output_modality: Option<String>,
    /// Only models supporting this inference type (ON_DEMAND, PROVISIONED)
    #[arg(long)]
    pub inference_type: Option<String>,
    /// Only models supporting this customization (FINE_TUNING, CONTINUED_PRE_TRAINING)
    #[arg(long)]
    pub customization_type: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InvokeArgs {
    /// Model id; defaults to the configured model
    #[arg(long, short)]
    pub model: Option<String>,
    /// Codec to use instead of the one derived from the model id
    #[arg(long)]
    pub provider: Option<String>,
    #[arg(long)]
    pub max_gen_len: Option<u32>,
    #[arg(long)]
    pub temperature: Option<f32>,
    #[arg(long)]
    pub top_p: Option<f32>,
    /// Additional prompts, invoked concurrently with the positional one
    #[arg(long = "prompt", short = 'p')]
    pub prompts: Vec<String>,
    /// Prompt text
    #[arg()]
    pub words: Vec<String>,
}

impl InvokeArgs {
    /// Positional words joined into one prompt, followed by each `--prompt`.
    pub fn collect_prompts(&self) -> Vec<String> {
        let mut prompts = Vec::with_capacity(self.prompts.len() + 1);
        let joined = self.words.join(" ");
        if !joined.trim().is_empty() {
            prompts.push(joined.trim().to_string());
        }
        prompts.extend(
            self.prompts
                .iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        );
        prompts
    }
}

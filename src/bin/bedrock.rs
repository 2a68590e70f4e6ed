//! Command-line entry point: `bedrock models` and `bedrock invoke`.

use bedrock_model_client::Cli;
use clap::Parser;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    bedrock_model_client::run(Cli::parse()).await
}

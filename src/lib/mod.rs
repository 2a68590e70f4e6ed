pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use cli::{Cli, Command};
pub use config::AppConfig;
pub use domain::types;
pub use infrastructure::{model, transport};

use cli::{InvokeArgs, ModelsArgs};
use domain::types::{GenerationParams, ModelFilter};
use futures::future::join_all;
use model::{CodecRegistry, ModelCatalogClient, ModelInvoker};
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};
use transport::{EnvCredentialProvider, HttpTransport, ServiceEndpoints};

/// Build the catalog client and invoker over one shared HTTPS transport.
pub fn build_clients(config: &AppConfig) -> (ModelCatalogClient, ModelInvoker) {
    let credentials = Arc::new(EnvCredentialProvider::new(config.api_key_env.clone()));
    let transport = Arc::new(HttpTransport::new(
        ServiceEndpoints::from_config(config),
        credentials,
    ));
    (
        ModelCatalogClient::new(transport.clone()),
        ModelInvoker::new(transport, CodecRegistry::with_defaults()),
    )
}

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.quiet);
    debug!(command = ?cli.command, config = ?cli.config, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(config::resolve_path);
    let mut app_config = AppConfig::load(config_path.as_deref())?;
    if let Some(path) = &config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    }
    if let Some(region) = &cli.region {
        app_config.region = region.clone();
    }
    if let Command::Invoke(args) = &cli.command {
        apply_invoke_overrides(args, &mut app_config);
    }
    app_config.validate()?;
    info!(region = app_config.region.as_str(), "Using region");

    let (catalog, invoker) = build_clients(&app_config);
    match &cli.command {
        Command::Models(args) => list_models(&catalog, args).await?,
        Command::Invoke(args) => invoke(&invoker, &app_config, args).await?,
    }
    Ok(())
}

async fn list_models(
    catalog: &ModelCatalogClient,
    args: &ModelsArgs,
) -> Result<(), Box<dyn Error>> {
    let filter = ModelFilter {
        provider: args.provider.clone(),
        output_modality: args.output_modality.clone(),
        inference_type: args.inference_type.clone(),
        customization_type: args.customization_type.clone(),
    };
    let models = catalog
        .list_models_filtered(&filter)
        .await
        .inspect_err(|e| error!(error = %e, "Listing models failed"))
        .map_err(|e| e.user_message())?;
    print!("{}", cli::render_catalog(&models));
    Ok(())
}

async fn invoke(
    invoker: &ModelInvoker,
    config: &AppConfig,
    args: &InvokeArgs,
) -> Result<(), Box<dyn Error>> {
    let prompts = args.collect_prompts();
    if prompts.is_empty() {
        return Err("prompt required via arguments or --prompt".into());
    }
    let model_id = args.model.as_deref().unwrap_or(&config.default_model);
    let params = config.generation;

    let calls = prompts.iter().map(|prompt| {
        generate(invoker, args.provider.as_deref(), model_id, prompt, params)
    });
    let results = join_all(calls).await;

    let mut failures = 0usize;
    for result in results {
        match result {
            Ok(text) => println!("{}", text.trim()),
            Err(e) => {
                error!(model = model_id, error = %e, "Invocation failed");
                eprintln!("{}", e.user_message());
                failures += 1;
            }
        }
    }
    if failures > 0 {
        return Err(format!("{failures} of {} invocations failed", prompts.len()).into());
    }
    Ok(())
}

async fn generate(
    invoker: &ModelInvoker,
    provider: Option<&str>,
    model_id: &str,
    prompt: &str,
    params: GenerationParams,
) -> Result<String, model::ModelError> {
    match provider {
        Some(provider) => {
            invoker
                .invoke_with_provider(provider, model_id, prompt, params)
                .await
        }
        None => invoker.invoke(model_id, prompt, params).await,
    }
}

fn apply_invoke_overrides(args: &InvokeArgs, config: &mut AppConfig) {
    if let Some(max_gen_len) = args.max_gen_len {
        config.generation.max_gen_len = max_gen_len;
    }
    if let Some(temperature) = args.temperature {
        config.generation.temperature = temperature;
    }
    if let Some(top_p) = args.top_p {
        config.generation.top_p = top_p;
    }
}

fn init_tracing(quiet: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
    });
}

use super::AppConfig;
use super::app::validate_generation;
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH};
use crate::domain::types::GenerationParams;
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    region: Option<String>,
    api_key_env: Option<String>,
    catalog_endpoint: Option<String>,
    runtime_endpoint: Option<String>,
    default_model: Option<String>,
    #[serde(default)]
    generation: RawGeneration,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawGeneration {
    max_gen_len: Option<u32>,
    temperature: Option<f32>,
    top_p: Option<f32>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Expand `~` and `$VAR` in a user-supplied path.
pub fn resolve_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
    }
}

/// Load and validate configuration.
///
/// An explicit path must exist; a missing file at the default path falls back
/// to built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { .. }) => {
                debug!("No configuration file at default path, using defaults");
                Ok(AppConfig::default())
            }
            other => other,
        },
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    let region = parsed.region.unwrap_or(defaults.region);
    if region.trim().is_empty() {
        return Err(ConfigError::EmptyRegion);
    }

    let generation = GenerationParams {
        max_gen_len: parsed
            .generation
            .max_gen_len
            .unwrap_or(defaults.generation.max_gen_len),
        temperature: parsed
            .generation
            .temperature
            .unwrap_or(defaults.generation.temperature),
        top_p: parsed.generation.top_p.unwrap_or(defaults.generation.top_p),
    };
    validate_generation(&generation)?;

    let config = AppConfig {
        region: region.trim().to_string(),
        api_key_env: parsed.api_key_env.unwrap_or(defaults.api_key_env),
        catalog_endpoint: parsed.catalog_endpoint.filter(|e| !e.trim().is_empty()),
        runtime_endpoint: parsed.runtime_endpoint.filter(|e| !e.trim().is_empty()),
        default_model: parsed.default_model.unwrap_or(defaults.default_model),
        generation,
    };
    config.validate()?;
    Ok(config)
}

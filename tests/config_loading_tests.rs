// Config loading tests - testing AppConfig::load defaults and validation errors

use bedrock_model_client::config::{AppConfig, ConfigError};
use bedrock_model_client::transport::ServiceEndpoints;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("bedrock.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn returns_error_when_explicit_file_not_found() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/bedrock.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn loads_full_configuration() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
region = "us-east-1"
api_key_env = "MY_BEDROCK_KEY"
default_model = "anthropic.claude-3-haiku-20240307-v1:0"

[generation]
max_gen_len = 256
temperature = 0.1
top_p = 1.0
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("load config");
    assert_eq!(config.region, "us-east-1");
    assert_eq!(config.api_key_env, "MY_BEDROCK_KEY");
    assert_eq!(config.default_model, "anthropic.claude-3-haiku-20240307-v1:0");
    assert_eq!(config.generation.max_gen_len, 256);
    assert_eq!(config.generation.top_p, 1.0);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "region = \"eu-central-1\"\n");

    let config = AppConfig::load(Some(&path)).expect("load config");
    let defaults = AppConfig::default();
    assert_eq!(config.region, "eu-central-1");
    assert_eq!(config.default_model, defaults.default_model);
    assert_eq!(config.generation, defaults.generation);
}

#[test]
fn endpoint_overrides_replace_region_urls() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
region = "eu-west-1"
runtime_endpoint = "http://localhost:4566"
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("load config");
    let endpoints = ServiceEndpoints::from_config(&config);
    assert_eq!(endpoints.catalog, "https://bedrock.eu-west-1.amazonaws.com");
    assert_eq!(endpoints.runtime, "http://localhost:4566");
}

#[test]
fn rejects_empty_region() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "region = \"  \"\n");
    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(ConfigError::EmptyRegion)
    ));
}

#[test]
fn rejects_out_of_range_temperature() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[generation]\ntemperature = 1.5\n");
    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(ConfigError::InvalidGeneration {
            field: "temperature",
            ..
        })
    ));
}

#[test]
fn rejects_zero_generation_length() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[generation]\nmax_gen_len = 0\n");
    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(ConfigError::InvalidGeneration {
            field: "max_gen_len",
            ..
        })
    ));
}

#[test]
fn rejects_unknown_keys() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "verify_tls = false\n");
    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn validate_catches_cli_overrides() {
    let mut config = AppConfig::default();
    config.generation.top_p = -0.1;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidGeneration { field: "top_p", .. })
    ));
}

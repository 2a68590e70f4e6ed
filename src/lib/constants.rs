//! Application constants
//!
//! Single source of truth for paths and other constants.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/bedrock.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Region used when the configuration does not name one
pub const DEFAULT_REGION: &str = "eu-west-1";

/// Environment variable holding the Bedrock API key
pub const DEFAULT_API_KEY_ENV: &str = "AWS_BEARER_TOKEN_BEDROCK";

/// Model invoked when neither the CLI nor the config names one
pub const DEFAULT_MODEL_ID: &str = "meta.llama3-2-1b-instruct-v1:0";

/// Content type of every invocation body
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Prefixes carried by cross-region inference profile ids (e.g. `eu.meta.llama...`)
pub const INFERENCE_PROFILE_PREFIXES: &[&str] = &["us", "us-gov", "eu", "apac", "global"];

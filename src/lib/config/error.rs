use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("'region' must not be empty")]
    EmptyRegion,

    #[error("'api_key_env' must name an environment variable")]
    EmptyApiKeyEnv,

    #[error("generation parameter '{field}' is out of range: {value}")]
    InvalidGeneration { field: &'static str, value: String },
}

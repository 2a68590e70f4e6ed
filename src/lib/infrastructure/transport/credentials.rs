//! Bearer credential sources

use std::env;

use tracing::warn;

use crate::infrastructure::model::traits::CredentialProvider;
use crate::infrastructure::model::types::ModelError;

/// Reads the bearer token from an environment variable on every call,
/// so a rotated key is picked up without rebuilding the transport.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    var: String,
}

impl EnvCredentialProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn bearer_token(&self) -> Result<String, ModelError> {
        match env::var(&self.var) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            Ok(_) => Err(ModelError::auth(format!(
                "environment variable {} is empty",
                self.var
            ))),
            Err(err) => {
                warn!(env_var = self.var.as_str(), %err, "API key environment variable is not set");
                Err(ModelError::auth(format!(
                    "environment variable {} is not set",
                    self.var
                )))
            }
        }
    }
}

/// Fixed token, for callers that resolve credentials themselves.
#[derive(Clone)]
pub struct StaticCredentialProvider {
    token: String,
}

impl StaticCredentialProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("token", &"***")
            .finish()
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn bearer_token(&self) -> Result<String, ModelError> {
        if self.token.trim().is_empty() {
            return Err(ModelError::auth("static credential is empty"));
        }
        Ok(self.token.clone())
    }
}

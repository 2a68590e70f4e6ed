//! Model error taxonomy and raw transport payloads

use serde::Deserialize;
use thiserror::Error;

/// Status and body of one service response, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Coarse error kind, for callers that only need to branch on category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelErrorKind {
    Auth,
    Transport,
    InvalidModel,
    MalformedResponse,
}

/// Model errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("authentication failed{}: {reason}", status_suffix(.status))]
    Auth { status: Option<u16>, reason: String },
    #[error("transport error calling '{target}'{}: {reason}", status_suffix(.status))]
    Transport {
        target: String,
        status: Option<u16>,
        reason: String,
        #[source]
        source: Option<reqwest::Error>,
    },
    #[error("model '{model}' is unknown or unsupported: {reason}")]
    InvalidModel { model: String, reason: String },
    /// `target` is the model id for invocations and the catalog for listings.
    #[error("malformed response from '{target}': {reason}")]
    MalformedResponse { target: String, reason: String },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

#[derive(Deserialize)]
struct ServiceErrorBody {
    #[serde(alias = "Message")]
    message: Option<String>,
}

impl ModelError {
    pub fn auth(reason: impl Into<String>) -> Self {
        Self::Auth {
            status: None,
            reason: reason.into(),
        }
    }

    pub fn transport(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            target: target.into(),
            status: None,
            reason: reason.into(),
            source: None,
        }
    }

    pub fn network(target: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            target: target.into(),
            status: source.status().map(|s| s.as_u16()),
            reason: source.to_string(),
            source: Some(source),
        }
    }

    pub fn invalid_model(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidModel {
            model: model.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Classify a non-2xx response.
    ///
    /// `model` is the model in scope for invocations and `None` for catalog calls,
    /// where a 404 cannot mean an unknown model.
    pub fn from_status(status: u16, body: &[u8], target: &str, model: Option<&str>) -> Self {
        let reason = service_message(body).unwrap_or_else(|| format!("service returned {status}"));
        match (status, model) {
            (401 | 403, _) => Self::Auth {
                status: Some(status),
                reason,
            },
            (404, Some(model)) => Self::invalid_model(model, reason),
            (400, Some(model)) if mentions_model_identifier(&reason) => {
                Self::invalid_model(model, reason)
            }
            _ => Self::Transport {
                target: target.to_string(),
                status: Some(status),
                reason,
                source: None,
            },
        }
    }

    pub fn kind(&self) -> ModelErrorKind {
        match self {
            ModelError::Auth { .. } => ModelErrorKind::Auth,
            ModelError::Transport { .. } => ModelErrorKind::Transport,
            ModelError::InvalidModel { .. } => ModelErrorKind::InvalidModel,
            ModelError::MalformedResponse { .. } => ModelErrorKind::MalformedResponse,
        }
    }

    /// Short message suitable for console output
    pub fn user_message(&self) -> String {
        match self {
            ModelError::Auth { .. } => {
                "Credentials were rejected. Check the Bedrock API key and its permissions.".into()
            }
            ModelError::Transport {
                target,
                status,
                source,
                ..
            } => match (status, source) {
                (_, Some(source)) if source.is_connect() => {
                    format!("Could not connect to '{target}'.")
                }
                (_, Some(source)) if source.is_timeout() => {
                    format!("Request to '{target}' timed out.")
                }
                (Some(503 | 502), _) => format!("'{target}' is currently unavailable."),
                (Some(429), _) => format!("'{target}' is throttling requests."),
                (Some(code), _) => format!("Request to '{target}' failed: {code}"),
                (None, _) => format!("Network error talking to '{target}'."),
            },
            ModelError::InvalidModel { model, .. } => {
                format!("Model '{model}' is not available in this region or account.")
            }
            ModelError::MalformedResponse { target, .. } => {
                format!("Response from '{target}' could not be decoded.")
            }
        }
    }
}

fn service_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ServiceErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

fn mentions_model_identifier(reason: &str) -> bool {
    let lower = reason.to_ascii_lowercase();
    lower.contains("model identifier") || lower.contains("model id")
}

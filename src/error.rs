//! Error types for the Cortex provider

use thiserror::Error;

use crate::client::models::ErrorEnvelope;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// An API call failed; `context` names the operation that was attempted.
    #[error("{context}: {source}")]
    Api {
        context: String,
        #[source]
        source: ApiError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ApiError> for Error {
    fn from(source: ApiError) -> Self {
        Error::Api {
            context: "API request failed".to_string(),
            source,
        }
    }
}

impl Error {
    /// The underlying API error, if this error came from an API call.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// API-related errors
///
/// `Network` and `Encode` happen before any status code is known. `Status`
/// means a response arrived with a non-2xx code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("{}", describe_status(.status, .envelope))]
    Status {
        status: u16,
        envelope: Option<ErrorEnvelope>,
    },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

fn describe_status(status: &u16, envelope: &Option<ErrorEnvelope>) -> String {
    match envelope {
        Some(envelope) => envelope.to_string(),
        None => format!("Unexpected status code: {}", status),
    }
}

impl ApiError {
    /// Attach operation context, producing a crate-level [`Error`].
    pub fn context(self, context: impl Into<String>) -> Error {
        Error::Api {
            context: context.into(),
            source: self,
        }
    }

    /// True when the server received the request and rejected it.
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    /// The decoded error envelope, when the failure response carried one.
    pub fn envelope(&self) -> Option<&ErrorEnvelope> {
        match self {
            ApiError::Status { envelope, .. } => envelope.as_ref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else if err.is_builder() {
            ApiError::Encode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("API token not configured. Set CORTEX_API_TOKEN or add `api_token` to the config file.")]
    MissingApiToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

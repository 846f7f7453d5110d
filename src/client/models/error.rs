//! API error envelope

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error body returned by the API alongside non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,

    pub message: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.http_status {
            write!(f, "[{}] ", status)?;
        }
        if let Some(kind) = &self.kind {
            write!(f, "{}: ", kind)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(details) = self.details.as_deref().filter(|d| !d.is_empty()) {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

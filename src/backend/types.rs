//! Wire types and errors for the rendering backend.

use crate::state::{TimeOptions, DEFAULT_FORECAST_DATE};
use serde::Deserialize;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The request could not be sent or the body could not be read.
    Network(String),
    /// The backend answered with a non-success status code.
    Status(u16),
    /// The body was not the expected JSON or image data.
    Decode(String),
    /// The body parsed but the backend reported failure or omitted fields.
    Rejected(String),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::Network(msg) => write!(f, "Network error: {}", msg),
            BackendError::Status(code) => write!(f, "Backend returned HTTP {}", code),
            BackendError::Decode(msg) => write!(f, "Decode error: {}", msg),
            BackendError::Rejected(msg) => write!(f, "Backend rejected request: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => BackendError::Status(status.as_u16()),
            None => BackendError::Network(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(e: serde_json::Error) -> Self {
        BackendError::Decode(e.to_string())
    }
}

/// Body of `/time-info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TimeInfo {
    #[serde(default)]
    pub times: Option<Vec<String>>,
    #[serde(default)]
    pub date: Option<String>,
}

impl TimeInfo {
    /// Missing labels become an empty list; a missing date becomes the default.
    pub fn into_options(self) -> TimeOptions {
        let date = self
            .date
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_FORECAST_DATE.to_string());
        TimeOptions::new(self.times.unwrap_or_default(), date)
    }
}

/// Body of `/create-shareable-map`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShareLinkResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub share_url: Option<String>,
}

impl ShareLinkResponse {
    /// The share path, if the backend reported success and supplied one.
    pub fn into_path(self) -> Result<String, BackendError> {
        if !self.success {
            return Err(BackendError::Rejected("success flag not set".to_string()));
        }
        match self.share_url {
            Some(path) if !path.trim().is_empty() => Ok(path),
            _ => Err(BackendError::Rejected("missing share_url".to_string())),
        }
    }
}

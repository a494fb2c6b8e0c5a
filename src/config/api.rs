//! Guide API configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Endpoints of the diary backend used by the guide
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_topics_path")]
    pub topics_path: String,

    /// Must contain `{topic_id}`
    #[serde(default = "default_details_path")]
    pub details_path: String,

    #[serde(default = "default_stream_path")]
    pub stream_path: String,

    /// Timeout of the taxonomy requests in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Timeout of a whole generation stream in seconds
    #[serde(default = "default_stream_timeout")]
    pub stream_timeout_secs: u64,

    /// Bearer token used by the command line client
    pub access_token: Option<String>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn stream_timeout(&self) -> Duration {
        Duration::from_secs(self.stream_timeout_secs)
    }

    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if !self.topics_path.starts_with('/') {
            return Err(ValidationError::InvalidPath("topics_path"));
        }
        if !self.details_path.starts_with('/') {
            return Err(ValidationError::InvalidPath("details_path"));
        }
        if !self.details_path.contains("{topic_id}") {
            return Err(ValidationError::MissingTopicPlaceholder);
        }
        if !self.stream_path.starts_with('/') {
            return Err(ValidationError::InvalidPath("stream_path"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.stream_timeout_secs == 0 || self.stream_timeout_secs > 600 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            topics_path: default_topics_path(),
            details_path: default_details_path(),
            stream_path: default_stream_path(),
            timeout_secs: default_timeout(),
            stream_timeout_secs: default_stream_timeout(),
            access_token: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_topics_path() -> String {
    "/api/v1/guide/guides".to_string()
}

fn default_details_path() -> String {
    "/api/v1/guide/guides/{topic_id}/details".to_string()
}

fn default_stream_path() -> String {
    "/api/v1/gpt/stream".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_stream_timeout() -> u64 {
    120
}

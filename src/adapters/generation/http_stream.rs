//! HTTP generation stream.
//!
//! Posts `{ "details": prompt }` with a bearer token and hands the chunked
//! response body back as raw bytes. Frame decoding is left to the consumer.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, Response};
use std::time::Duration;

use crate::domain::generation::GenerationError;
use crate::ports::{AccessToken, ChunkStream, GenerationRequest, GenerationStream};

/// Configuration for the HTTP generation stream.
#[derive(Debug, Clone)]
pub struct HttpStreamConfig {
    pub base_url: String,
    pub stream_path: String,
    /// Applies to connecting and to the whole response.
    pub timeout: Duration,
}

impl HttpStreamConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            stream_path: "/api/v1/gpt/stream".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_stream_path(mut self, path: impl Into<String>) -> Self {
        self.stream_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn stream_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.stream_path)
    }
}

/// Generation stream over HTTP.
pub struct HttpGenerationStream {
    config: HttpStreamConfig,
    client: Client,
}

impl HttpGenerationStream {
    /// Creates a stream adapter with its own HTTP client.
    pub fn new(config: HttpStreamConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::invalid_configuration(e.to_string()))?;

        Ok(Self { config, client })
    }

    async fn handle_response_status(response: Response) -> Result<Response, GenerationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 | 403 => Err(GenerationError::Authentication),
            code => Err(GenerationError::rejected(code, body)),
        }
    }
}

#[async_trait]
impl GenerationStream for HttpGenerationStream {
    async fn open(
        &self,
        request: &GenerationRequest,
        token: &AccessToken,
    ) -> Result<ChunkStream, GenerationError> {
        let url = self.config.stream_url();
        tracing::debug!(%url, prompt_len = request.details.len(), "opening generation stream");

        let response = self
            .client
            .post(&url)
            .header("Authorization", token.bearer_header())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::transport(format!(
                        "timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    GenerationError::transport(format!("connection failed: {}", e))
                } else {
                    GenerationError::transport(e.to_string())
                }
            })?;

        let response = Self::handle_response_status(response).await?;

        if response.content_length() == Some(0) {
            return Err(GenerationError::stream_unavailable("response has no body"));
        }

        let chunks = response.bytes_stream().map(|chunk| {
            chunk
                .map(|bytes| bytes.to_vec())
                .map_err(|e| GenerationError::transport(format!("stream error: {}", e)))
        });

        Ok(Box::pin(chunks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = HttpStreamConfig::new("https://diary.example.com/")
            .with_stream_path("/stream")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.stream_url(), "https://diary.example.com/stream");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn default_path_targets_stream_endpoint() {
        let config = HttpStreamConfig::new("http://localhost:8080");
        assert_eq!(config.stream_url(), "http://localhost:8080/api/v1/gpt/stream");
    }

    #[test]
    fn adapter_builds_from_config() {
        assert!(HttpGenerationStream::new(HttpStreamConfig::new("http://localhost")).is_ok());
    }
}

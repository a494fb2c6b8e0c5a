//! GenerationStream port - Opens the chunked generation response.
//!
//! The port only delivers raw byte chunks. Decoding, frame parsing,
//! cancellation and draft writes all happen in the consumer so that every
//! transport behaves the same way.
//!
//! # Example
//!
//! ```ignore
//! let request = GenerationRequest::new("Park|ran a lot");
//! let mut chunks = stream.open(&request, &token).await?;
//! while let Some(chunk) = chunks.next().await {
//!     decoder.feed(&chunk?);
//! }
//! ```

use async_trait::async_trait;
use futures::Stream;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::fmt;
use std::pin::Pin;

use crate::domain::generation::GenerationError;

/// Stream of raw response chunks.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, GenerationError>> + Send>>;

/// Port for the content generation endpoint.
#[async_trait]
pub trait GenerationStream: Send + Sync {
    /// Sends the prompt and returns the response body as a chunk stream.
    ///
    /// Fails before any chunk is produced when the endpoint cannot be
    /// reached, refuses the token or answers without a body.
    async fn open(
        &self,
        request: &GenerationRequest,
        token: &AccessToken,
    ) -> Result<ChunkStream, GenerationError>;
}

/// Request body of the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    /// The synthesized prompt.
    pub details: String,
}

impl GenerationRequest {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }
}

/// Bearer token for the generation and taxonomy endpoints.
#[derive(Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    /// Returns the raw token for building the authorization header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Value of the `Authorization` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.expose())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_prompt_as_details() {
        let json = serde_json::to_value(GenerationRequest::new("Park|ran a lot")).unwrap();
        assert_eq!(json, serde_json::json!({ "details": "Park|ran a lot" }));
    }

    #[test]
    fn token_is_redacted_in_debug_output() {
        let token = AccessToken::new("secret-token");
        assert_eq!(format!("{:?}", token), "AccessToken([REDACTED])");
        assert_eq!(token.bearer_header(), "Bearer secret-token");
    }
}

//! HTTP taxonomy source.
//!
//! Fetches topics and details from the guide endpoints. Both endpoints wrap
//! their payload in a `{ code, message, data }` envelope; any code other than
//! `"0000"` is treated as an unavailable taxonomy.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::foundation::TopicId;
use crate::domain::guide::{Detail, TaxonomyError, Topic};
use crate::ports::{AccessToken, TaxonomySource};

/// Envelope code of a successful response.
pub const SUCCESS_CODE: &str = "0000";

/// Placeholder substituted with the topic id in the details path.
pub const TOPIC_ID_PLACEHOLDER: &str = "{topic_id}";

/// Configuration for the HTTP taxonomy source.
#[derive(Debug, Clone)]
pub struct HttpTaxonomyConfig {
    pub base_url: String,
    pub topics_path: String,
    /// Path template containing `{topic_id}`.
    pub details_path: String,
    pub timeout: Duration,
    access_token: Option<AccessToken>,
}

impl HttpTaxonomyConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            topics_path: "/api/v1/guide/guides".to_string(),
            details_path: "/api/v1/guide/guides/{topic_id}/details".to_string(),
            timeout: Duration::from_secs(10),
            access_token: None,
        }
    }

    pub fn with_topics_path(mut self, path: impl Into<String>) -> Self {
        self.topics_path = path.into();
        self
    }

    pub fn with_details_path(mut self, path: impl Into<String>) -> Self {
        self.details_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends the token as a bearer header on every fetch.
    pub fn with_access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    fn topics_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.topics_path)
    }

    fn details_url(&self, topic_id: TopicId) -> String {
        let path = self
            .details_path
            .replace(TOPIC_ID_PLACEHOLDER, &topic_id.to_string());
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Taxonomy source backed by the guide HTTP endpoints.
pub struct HttpTaxonomySource {
    config: HttpTaxonomyConfig,
    client: Client,
}

impl HttpTaxonomySource {
    /// Creates a source with its own HTTP client.
    pub fn new(config: HttpTaxonomyConfig) -> Result<Self, TaxonomyError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TaxonomyError::unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    async fn get_envelope<T: DeserializeOwned>(&self, url: String) -> Result<T, TaxonomyError> {
        tracing::debug!(%url, "fetching guide taxonomy");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.config.access_token {
            request = request.header("Authorization", token.bearer_header());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TaxonomyError::unavailable(format!("request to {} timed out", url))
            } else {
                TaxonomyError::unavailable(e.to_string())
            }
        })?;

        let envelope: Envelope<T> = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TaxonomyError::unavailable(format!("invalid response body: {}", e)))?;

        envelope.into_data()
    }

    async fn check_status(response: Response) -> Result<Response, TaxonomyError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "guide taxonomy request failed");
        Err(TaxonomyError::unavailable(format!("HTTP {}: {}", status, body)))
    }
}

#[async_trait]
impl TaxonomySource for HttpTaxonomySource {
    async fn fetch_topics(&self) -> Result<Vec<Topic>, TaxonomyError> {
        let records: Vec<TopicRecord> = self.get_envelope(self.config.topics_url()).await?;
        Ok(records.into_iter().map(TopicRecord::into_topic).collect())
    }

    async fn fetch_details(&self, topic_id: TopicId) -> Result<Vec<Detail>, TaxonomyError> {
        let records: Vec<DetailRecord> =
            self.get_envelope(self.config.details_url(topic_id)).await?;
        Ok(records
            .into_iter()
            .map(|record| Detail::new(topic_id, record.detail))
            .collect())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    code: String,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

impl<T> Envelope<T> {
    fn into_data(self) -> Result<T, TaxonomyError> {
        if self.code != SUCCESS_CODE {
            return Err(TaxonomyError::unavailable(format!(
                "code {}: {}",
                self.code,
                self.message.unwrap_or_default()
            )));
        }
        self.data
            .ok_or_else(|| TaxonomyError::unavailable("response envelope has no data"))
    }
}

#[derive(Debug, Deserialize)]
struct TopicRecord {
    id: i64,
    guide: String,
    #[serde(default)]
    description: Option<String>,
}

impl TopicRecord {
    fn into_topic(self) -> Topic {
        Topic::new(
            TopicId::new(self.id),
            self.guide,
            self.description.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct DetailRecord {
    #[allow(dead_code)]
    id: i64,
    detail: String,
}

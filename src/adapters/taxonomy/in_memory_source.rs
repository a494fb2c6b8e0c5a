//! In-memory taxonomy source for tests and offline runs.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::foundation::TopicId;
use crate::domain::guide::{Detail, TaxonomyError, Topic};
use crate::ports::TaxonomySource;

/// Serves a fixed taxonomy from memory.
///
/// Failures can be injected per endpoint to exercise the unavailable path.
#[derive(Debug, Default)]
pub struct InMemoryTaxonomySource {
    topics: Vec<Topic>,
    details: Vec<Detail>,
    fail_topics: bool,
    fail_details_for: Option<TopicId>,
    calls: AtomicUsize,
}

impl InMemoryTaxonomySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a topic with its ordered detail sentences.
    pub fn with_topic<S: Into<String>>(
        mut self,
        id: i64,
        label: impl Into<String>,
        sentences: impl IntoIterator<Item = S>,
    ) -> Self {
        let id = TopicId::new(id);
        self.topics.push(Topic::new(id, label, ""));
        self.details
            .extend(sentences.into_iter().map(|sentence| Detail::new(id, sentence)));
        self
    }

    /// Makes the topic fetch fail.
    pub fn failing_topics(mut self) -> Self {
        self.fail_topics = true;
        self
    }

    /// Makes the detail fetch of one topic fail.
    pub fn failing_details_for(mut self, id: i64) -> Self {
        self.fail_details_for = Some(TopicId::new(id));
        self
    }

    /// Number of fetches served so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaxonomySource for InMemoryTaxonomySource {
    async fn fetch_topics(&self) -> Result<Vec<Topic>, TaxonomyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_topics {
            return Err(TaxonomyError::unavailable("topics endpoint failed"));
        }
        Ok(self.topics.clone())
    }

    async fn fetch_details(&self, topic_id: TopicId) -> Result<Vec<Detail>, TaxonomyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_details_for == Some(topic_id) {
            return Err(TaxonomyError::unavailable(format!(
                "details endpoint failed for topic {}",
                topic_id
            )));
        }
        Ok(self
            .details
            .iter()
            .filter(|detail| detail.topic_id == topic_id)
            .cloned()
            .collect())
    }
}

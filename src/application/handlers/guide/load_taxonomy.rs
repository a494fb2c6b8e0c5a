//! TaxonomyLoader - Fetches the guide taxonomy and builds the slide deck.

use std::sync::Arc;

use crate::domain::guide::{SlideDeck, Taxonomy, TaxonomyError, TopicEntry};
use crate::ports::TaxonomySource;

/// Loads topics and their details, in order, from a [`TaxonomySource`].
///
/// Any failed fetch fails the whole load; no partial deck is ever built.
pub struct TaxonomyLoader {
    source: Arc<dyn TaxonomySource>,
    custom_entry_label: String,
}

impl TaxonomyLoader {
    pub fn new(source: Arc<dyn TaxonomySource>, custom_entry_label: impl Into<String>) -> Self {
        Self {
            source,
            custom_entry_label: custom_entry_label.into(),
        }
    }

    /// Fetches the topic list, then the details of each topic in turn.
    pub async fn load(&self) -> Result<Taxonomy, TaxonomyError> {
        let topics = self.source.fetch_topics().await.map_err(|err| {
            tracing::warn!(error = %err, "failed to fetch guide topics");
            err
        })?;

        let mut entries = Vec::with_capacity(topics.len());
        for topic in topics {
            let details = self.source.fetch_details(topic.id).await.map_err(|err| {
                tracing::warn!(topic_id = %topic.id, error = %err, "failed to fetch guide details");
                err
            })?;
            entries.push(TopicEntry::new(topic, details));
        }

        tracing::debug!(topics = entries.len(), "guide taxonomy loaded");
        Ok(Taxonomy::new(entries))
    }

    /// Loads the taxonomy and flattens it into the wizard's slide deck.
    pub async fn load_deck(&self) -> Result<Arc<SlideDeck>, TaxonomyError> {
        let taxonomy = self.load().await?;
        Ok(Arc::new(SlideDeck::build(taxonomy, &self.custom_entry_label)))
    }
}

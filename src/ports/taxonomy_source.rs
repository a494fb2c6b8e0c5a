//! TaxonomySource port - Topic and detail fetches for the guide.

use async_trait::async_trait;

use crate::domain::foundation::TopicId;
use crate::domain::guide::{Detail, TaxonomyError, Topic};

/// Read access to the guide taxonomy.
///
/// Both calls return records in server order; the loader relies on that
/// order for slide layout.
#[async_trait]
pub trait TaxonomySource: Send + Sync {
    /// Fetches the ordered list of topics.
    async fn fetch_topics(&self) -> Result<Vec<Topic>, TaxonomyError>;

    /// Fetches the ordered details of one topic.
    async fn fetch_details(&self, topic_id: TopicId) -> Result<Vec<Detail>, TaxonomyError>;
}

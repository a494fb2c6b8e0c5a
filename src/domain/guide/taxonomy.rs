//! Topic/detail taxonomy as delivered by the guide endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TopicId;

/// A top-level category offered on the first slide (e.g. "walk", "meal").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub label: String,
    pub description: String,
}

impl Topic {
    /// Creates a new topic.
    pub fn new(id: TopicId, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            description: description.into(),
        }
    }
}

/// A pre-written sentence belonging to one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub topic_id: TopicId,
    pub sentence: String,
}

impl Detail {
    /// Creates a new detail for the given topic.
    pub fn new(topic_id: TopicId, sentence: impl Into<String>) -> Self {
        Self {
            topic_id,
            sentence: sentence.into(),
        }
    }
}

/// A topic together with its ordered details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicEntry {
    pub topic: Topic,
    pub details: Vec<Detail>,
}

impl TopicEntry {
    /// Creates a topic entry.
    pub fn new(topic: Topic, details: Vec<Detail>) -> Self {
        Self { topic, details }
    }
}

/// The full two-level taxonomy, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    entries: Vec<TopicEntry>,
}

impl Taxonomy {
    /// Creates a taxonomy from ordered entries.
    pub fn new(entries: Vec<TopicEntry>) -> Self {
        Self { entries }
    }

    /// Returns all entries in order.
    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    /// Returns the entry at a topic index.
    pub fn entry(&self, topic: usize) -> Option<&TopicEntry> {
        self.entries.get(topic)
    }

    /// Returns the number of topics.
    pub fn topic_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no topics at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_server_order() {
        let walk = Topic::new(TopicId::new(3), "Walk", "Outdoor time");
        let meal = Topic::new(TopicId::new(1), "Meal", "Food");
        let taxonomy = Taxonomy::new(vec![
            TopicEntry::new(walk, vec![Detail::new(TopicId::new(3), "Park")]),
            TopicEntry::new(meal, vec![]),
        ]);

        assert_eq!(taxonomy.topic_count(), 2);
        assert_eq!(taxonomy.entry(0).unwrap().topic.label, "Walk");
        assert_eq!(taxonomy.entry(1).unwrap().topic.label, "Meal");
        assert!(taxonomy.entry(2).is_none());
    }

    #[test]
    fn default_taxonomy_is_empty() {
        assert!(Taxonomy::default().is_empty());
    }
}

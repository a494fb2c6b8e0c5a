//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Server-assigned identifier of a guide topic.
///
/// Topic ids come from the taxonomy endpoint and are only ever echoed back
/// when fetching that topic's details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(i64);

impl TopicId {
    /// Creates a TopicId from the raw server value.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a single draft generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationId(Uuid);

impl GenerationId {
    /// Creates a new random GenerationId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GenerationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_id_displays_raw_value() {
        assert_eq!(TopicId::new(42).to_string(), "42");
    }

    #[test]
    fn topic_id_deserializes_from_bare_number() {
        let id: TopicId = serde_json::from_str("7").unwrap();
        assert_eq!(id, TopicId::new(7));
    }

    #[test]
    fn generation_ids_are_unique() {
        assert_ne!(GenerationId::new(), GenerationId::new());
    }

    #[test]
    fn generation_id_serializes_as_bare_uuid() {
        let id = GenerationId::new();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }
}

//! Per-line frame parsing of the generation stream.
//!
//! Each non-blank line is an optional prefix followed by a JSON object. The
//! incremental text lives at `choices[0].delta.content`; a missing path is
//! treated as "no text" rather than an error.

use serde_json::Value;

/// JSON pointer to the incremental content of a frame.
const DELTA_CONTENT_POINTER: &str = "/choices/0/delta/content";

/// Outcome of parsing one decoded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameLine {
    /// Empty or whitespace-only line.
    Blank,
    /// End-of-stream marker.
    Done,
    /// Text to append to the draft.
    Delta(String),
    /// Valid frame carrying no text (role announcements, finish frames).
    NoContent,
    /// Line that is not a JSON object; it contributes nothing.
    Malformed(String),
}

impl FrameLine {
    /// Text this line contributes, if any.
    pub fn delta(&self) -> Option<&str> {
        match self {
            FrameLine::Delta(text) => Some(text),
            _ => None,
        }
    }
}

/// Parses decoded lines into [`FrameLine`]s.
#[derive(Debug, Clone)]
pub struct FrameParser {
    prefix: String,
    end_marker: String,
}

impl FrameParser {
    pub fn new(prefix: impl Into<String>, end_marker: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            end_marker: end_marker.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn end_marker(&self) -> &str {
        &self.end_marker
    }

    /// Classifies one line.
    pub fn parse(&self, line: &str) -> FrameLine {
        let payload = line.strip_prefix(self.prefix.as_str()).unwrap_or(line).trim();

        if payload.is_empty() {
            return FrameLine::Blank;
        }
        if !self.end_marker.is_empty() && payload == self.end_marker {
            return FrameLine::Done;
        }

        let value: Value = match serde_json::from_str(payload) {
            Ok(value) => value,
            Err(e) => return FrameLine::Malformed(e.to_string()),
        };
        if !value.is_object() {
            return FrameLine::Malformed("frame is not a JSON object".to_string());
        }

        match value.pointer(DELTA_CONTENT_POINTER).and_then(Value::as_str) {
            Some(text) if !text.is_empty() => FrameLine::Delta(text.to_string()),
            _ => FrameLine::NoContent,
        }
    }
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new("data:", "[DONE]")
    }
}

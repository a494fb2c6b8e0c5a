//! Generation stream framing configuration

use serde::Deserialize;

use crate::domain::generation::FrameParser;

/// Framing of the generation stream
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Prefix stripped from each line before parsing
    #[serde(default = "default_frame_prefix")]
    pub frame_prefix: String,

    /// Line that marks the end of the stream; empty disables detection
    #[serde(default = "default_end_marker")]
    pub end_marker: String,
}

impl GenerationConfig {
    /// Builds the frame parser for this framing.
    pub fn frame_parser(&self) -> FrameParser {
        FrameParser::new(self.frame_prefix.clone(), self.end_marker.clone())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            frame_prefix: default_frame_prefix(),
            end_marker: default_end_marker(),
        }
    }
}

fn default_frame_prefix() -> String {
    "data:".to_string()
}

fn default_end_marker() -> String {
    "[DONE]".to_string()
}

//! GenerationStatus enum for tracking a streaming generation run.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of the streaming consumer.
///
/// ```text
/// Idle -> Streaming -> { Completed | Cancelled | Failed } -> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    #[default]
    Idle,
    Streaming,
    Completed,
    Cancelled,
    Failed,
}

impl GenerationStatus {
    /// Returns true while a stream is being consumed.
    pub fn is_streaming(&self) -> bool {
        matches!(self, GenerationStatus::Streaming)
    }

    /// Returns true once a run has ended, whatever the outcome.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            GenerationStatus::Completed | GenerationStatus::Cancelled | GenerationStatus::Failed
        )
    }
}

impl StateMachine for GenerationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GenerationStatus::*;
        matches!(
            (self, target),
            (Idle, Streaming)
                | (Streaming, Completed)
                | (Streaming, Cancelled)
                | (Streaming, Failed)
                | (Completed, Idle)
                | (Cancelled, Idle)
                | (Failed, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GenerationStatus::*;
        match self {
            Idle => vec![Streaming],
            Streaming => vec![Completed, Cancelled, Failed],
            Completed | Cancelled | Failed => vec![Idle],
        }
    }
}

impl fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GenerationStatus::Idle => "Idle",
            GenerationStatus::Streaming => "Streaming",
            GenerationStatus::Completed => "Completed",
            GenerationStatus::Cancelled => "Cancelled",
            GenerationStatus::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}

//! Summary of one streaming generation run.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::status::GenerationStatus;
use crate::domain::foundation::{GenerationId, Timestamp};

/// How the stream stopped delivering frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The end marker frame was received.
    EndMarker,
    /// The transport closed without an end marker.
    TransportClose,
    /// The cancellation token fired.
    Cancelled,
    /// The transport reported an error.
    TransportError,
    /// The draft field refused an append.
    DraftRejected,
}

/// Outcome of a run, returned by the consumer once it stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub id: GenerationId,
    pub status: GenerationStatus,
    /// Characters appended to the draft during this run.
    pub appended_chars: usize,
    pub applied_deltas: usize,
    /// Lines that could not be parsed as frames.
    pub skipped_lines: usize,
    pub termination: Termination,
    pub started_at: Timestamp,
    pub finished_at: Timestamp,
}

impl GenerationReport {
    /// Returns true if the run ended without cancellation or failure.
    pub fn is_completed(&self) -> bool {
        self.status == GenerationStatus::Completed
    }

    /// Returns true if the server signalled the end explicitly.
    pub fn saw_end_marker(&self) -> bool {
        self.termination == Termination::EndMarker
    }

    /// Wall-clock time between start and finish.
    pub fn elapsed(&self) -> Duration {
        self.finished_at.duration_since(&self.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_termination_in_snake_case() {
        let now = Timestamp::now();
        let report = GenerationReport {
            id: GenerationId::new(),
            status: GenerationStatus::Completed,
            appended_chars: 11,
            applied_deltas: 4,
            skipped_lines: 0,
            termination: Termination::TransportClose,
            started_at: now,
            finished_at: now,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["termination"], "transport_close");
        assert_eq!(json["status"], "completed");
        assert!(report.is_completed());
        assert!(!report.saw_end_marker());
        assert_eq!(report.elapsed(), Duration::zero());
    }
}

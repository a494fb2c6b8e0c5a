//! Errors raised by the guide wizard, the prompt synthesizer and the
//! taxonomy loader.

use thiserror::Error;

use super::slide::SlidePosition;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Rejected wizard events. None of these are fatal; the wizard state is
/// left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Select at least one topic to continue")]
    NoTopicSelected,

    #[error("Already at the first slide")]
    AtFirstSlide,

    #[error("The closing slide has no next slide; finalize instead")]
    AtTerminalSlide,

    #[error("Finalize is only available from the closing slide")]
    NotAtTerminalSlide,

    #[error("No topic is selected")]
    IncompleteSelection,

    #[error("Topic index {index} is out of range ({count} topics)")]
    TopicOutOfRange { index: usize, count: usize },

    #[error("Item {item} is out of range for topic {topic} ({count} items)")]
    ItemOutOfRange {
        topic: usize,
        item: usize,
        count: usize,
    },

    #[error("Topic {0} is not selected")]
    TopicNotSelected(usize),

    #[error("Cursor {position} is outside the deck ({len} slides)")]
    CursorOutOfRange { position: usize, len: usize },

    #[error("Event targets the {expected} but the cursor is on the {actual}")]
    NotOnSlide {
        expected: SlidePosition,
        actual: SlidePosition,
    },
}

impl WizardError {
    /// Returns true if the error should be shown to the user as a
    /// validation message rather than ignored as a boundary no-op.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WizardError::NoTopicSelected | WizardError::IncompleteSelection
        )
    }
}

impl From<WizardError> for DomainError {
    fn from(err: WizardError) -> Self {
        let code = match err {
            WizardError::NoTopicSelected => ErrorCode::NoTopicSelected,
            WizardError::IncompleteSelection => ErrorCode::IncompleteSelection,
            WizardError::TopicOutOfRange { .. }
            | WizardError::ItemOutOfRange { .. }
            | WizardError::TopicNotSelected(_) => ErrorCode::ValidationFailed,
            WizardError::AtFirstSlide
            | WizardError::AtTerminalSlide
            | WizardError::NotAtTerminalSlide
            | WizardError::NotOnSlide { .. }
            | WizardError::CursorOutOfRange { .. } => ErrorCode::InvalidNavigation,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Prompt synthesis errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("Selection produced an empty prompt")]
    EmptyPrompt,
}

impl From<PromptError> for DomainError {
    fn from(err: PromptError) -> Self {
        DomainError::new(ErrorCode::EmptyPrompt, err.to_string())
    }
}

/// Taxonomy loading errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("Guide taxonomy unavailable: {0}")]
    Unavailable(String),
}

impl TaxonomyError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        TaxonomyError::Unavailable(message.into())
    }
}

impl From<TaxonomyError> for DomainError {
    fn from(err: TaxonomyError) -> Self {
        DomainError::new(ErrorCode::TaxonomyUnavailable, err.to_string())
    }
}

//! Errors raised while streaming a generated draft.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Draft field errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// The field is being written by a generation stream.
    #[error("draft is locked while generation is streaming")]
    Locked,
}

impl From<DraftError> for DomainError {
    fn from(err: DraftError) -> Self {
        DomainError::new(ErrorCode::DraftLocked, err.to_string())
    }
}

/// Streaming generation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// A run is already in progress on this consumer.
    #[error("generation is already streaming")]
    AlreadyStreaming,

    /// The response carried no readable body.
    #[error("generation stream unavailable: {0}")]
    StreamUnavailable(String),

    /// Network failure while opening or reading the stream.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("generation rejected with status {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The access token was refused.
    #[error("authentication failed")]
    Authentication,

    /// The client could not be configured.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The draft refused the write.
    #[error(transparent)]
    Draft(#[from] DraftError),
}

impl GenerationError {
    /// Creates a stream unavailable error.
    pub fn stream_unavailable(message: impl Into<String>) -> Self {
        Self::StreamUnavailable(message.into())
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a rejected error.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Returns the presentation error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            GenerationError::AlreadyStreaming => ErrorCode::AlreadyStreaming,
            GenerationError::Authentication => ErrorCode::Unauthorized,
            GenerationError::Draft(_) => ErrorCode::DraftLocked,
            GenerationError::InvalidConfiguration(_) => ErrorCode::InternalError,
            GenerationError::StreamUnavailable(_)
            | GenerationError::Transport(_)
            | GenerationError::Rejected { .. } => ErrorCode::GenerationFailed,
        }
    }
}

impl From<GenerationError> for DomainError {
    fn from(err: GenerationError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            GenerationError::Rejected { status, .. } => {
                domain.with_detail("status", status.to_string())
            }
            _ => domain,
        }
    }
}

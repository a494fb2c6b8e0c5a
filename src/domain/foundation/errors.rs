//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    NoTopicSelected,
    IncompleteSelection,
    EmptyPrompt,

    // Navigation errors
    InvalidNavigation,

    // Upstream errors
    TaxonomyUnavailable,
    GenerationFailed,
    AlreadyStreaming,
    Unauthorized,

    // Draft errors
    DraftLocked,

    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::NoTopicSelected => "NO_TOPIC_SELECTED",
            ErrorCode::IncompleteSelection => "INCOMPLETE_SELECTION",
            ErrorCode::EmptyPrompt => "EMPTY_PROMPT",
            ErrorCode::InvalidNavigation => "INVALID_NAVIGATION",
            ErrorCode::TaxonomyUnavailable => "TAXONOMY_UNAVAILABLE",
            ErrorCode::GenerationFailed => "GENERATION_FAILED",
            ErrorCode::AlreadyStreaming => "ALREADY_STREAMING",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::DraftLocked => "DRAFT_LOCKED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// Module errors convert into this type when they have to be shown to the
/// user; the code is stable, the message is human readable.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

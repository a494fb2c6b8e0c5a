//! In-memory draft field.
//!
//! Holds the "content" field of the diary form. Manual edits are refused while
//! a generation stream owns the field; stream writes go through [`DraftSink`].

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::generation::DraftError;
use crate::ports::DraftSink;

#[derive(Debug, Default)]
struct DraftState {
    value: String,
    locked: bool,
}

/// Text field shared between the user and the streaming consumer.
#[derive(Debug, Default)]
pub struct DraftField {
    state: Mutex<DraftState>,
}

impl DraftField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field holding text the user already typed.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(DraftState {
                value: value.into(),
                locked: false,
            }),
        }
    }

    /// Current text.
    pub fn value(&self) -> String {
        self.state().value.clone()
    }

    /// Returns true while a stream owns the field.
    pub fn is_locked(&self) -> bool {
        self.state().locked
    }

    /// Replaces the text on behalf of the user.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::Locked` while a generation stream is running.
    pub fn edit(&self, value: impl Into<String>) -> Result<(), DraftError> {
        self.set(value.into())
    }

    fn state(&self) -> MutexGuard<'_, DraftState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DraftSink for DraftField {
    fn get(&self) -> String {
        self.value()
    }

    fn set(&self, value: String) -> Result<(), DraftError> {
        let mut state = self.state();
        if state.locked {
            return Err(DraftError::Locked);
        }
        state.value = value;
        Ok(())
    }

    fn append(&self, delta: &str) -> Result<(), DraftError> {
        self.state().value.push_str(delta);
        Ok(())
    }

    fn begin_stream(&self) {
        self.state().locked = true;
    }

    fn end_stream(&self) {
        self.state().locked = false;
    }
}

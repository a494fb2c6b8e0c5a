//! DraftSink port - The text field generated content is appended to.

use crate::domain::generation::DraftError;

/// A single mutable text field owned by the enclosing form.
///
/// While a stream is running the consumer is the only writer: it calls
/// [`DraftSink::begin_stream`] before the first append and
/// [`DraftSink::end_stream`] on every exit path. `set` is the writer for
/// everyone else and is refused in between.
pub trait DraftSink: Send + Sync {
    /// Current value.
    fn get(&self) -> String;

    /// Replaces the value.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::Locked` while a stream holds the field.
    fn set(&self, value: String) -> Result<(), DraftError>;

    /// Appends a delta as one read-modify-write. Reserved for the stream
    /// that holds the field.
    fn append(&self, delta: &str) -> Result<(), DraftError>;

    /// Called when a stream takes ownership of the field.
    fn begin_stream(&self) {}

    /// Called when the stream releases the field.
    fn end_stream(&self) {}
}

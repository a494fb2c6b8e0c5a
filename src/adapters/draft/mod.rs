//! Draft adapters - Implementations of the DraftSink port.

mod draft_field;

pub use draft_field::DraftField;

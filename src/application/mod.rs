//! Application layer - Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports:
//! loading the taxonomy, running a guide session and streaming the draft.

pub mod handlers;

pub use handlers::{FinalizeError, GuideSession, StreamingGenerationConsumer, TaxonomyLoader};

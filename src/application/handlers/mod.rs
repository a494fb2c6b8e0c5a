//! Application handlers.
//!
//! Handlers that orchestrate the guide domain over its ports.

pub mod generation;
pub mod guide;

pub use generation::StreamingGenerationConsumer;
pub use guide::{FinalizeError, GuideSession, TaxonomyLoader};

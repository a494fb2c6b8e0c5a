//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the guide domain to external systems:
//! - `taxonomy` - Guide endpoints over HTTP, plus an in-memory source
//! - `generation` - Streaming generation endpoint over HTTP, plus a mock
//! - `draft` - In-memory draft field with stream locking
//! - `surface` - Headless presentation handle

pub mod draft;
pub mod generation;
pub mod surface;
pub mod taxonomy;

pub use draft::DraftField;
pub use generation::{HttpGenerationStream, HttpStreamConfig, MockGenerationStream};
pub use surface::TracingSurface;
pub use taxonomy::{HttpTaxonomyConfig, HttpTaxonomySource, InMemoryTaxonomySource};

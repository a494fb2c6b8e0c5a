//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the guide domain and the outside world. Adapters implement these ports.
//!
//! - `TaxonomySource` - Topic and detail fetches
//! - `GenerationStream` - Chunked content generation response
//! - `DraftSink` - Text field the generated draft is written into
//! - `GuideSurface` - Presentation handle of the wizard

mod draft_sink;
mod generation_stream;
mod guide_surface;
mod taxonomy_source;

pub use draft_sink::DraftSink;
pub use generation_stream::{AccessToken, ChunkStream, GenerationRequest, GenerationStream};
pub use guide_surface::GuideSurface;
pub use taxonomy_source::TaxonomySource;

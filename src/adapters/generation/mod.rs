//! Generation adapters - Implementations of the GenerationStream port.

mod http_stream;
mod mock_stream;

pub use http_stream::{HttpGenerationStream, HttpStreamConfig};
pub use mock_stream::{delta_frame, MockChunk, MockChunkSender, MockGenerationStream};

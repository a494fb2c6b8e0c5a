//! Generation handlers - Streaming the generated draft.

mod stream_draft;

pub use stream_draft::StreamingGenerationConsumer;

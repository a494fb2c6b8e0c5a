//! Generation module - Streaming draft generation primitives.
//!
//! Pure pieces of the streaming consumer: its lifecycle status, incremental
//! line decoding, frame parsing and the run report.

mod decoder;
mod errors;
mod frame;
mod report;
mod status;

pub use decoder::LineDecoder;
pub use errors::{DraftError, GenerationError};
pub use frame::{FrameLine, FrameParser};
pub use report::{GenerationReport, Termination};
pub use status::GenerationStatus;

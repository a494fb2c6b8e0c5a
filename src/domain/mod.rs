//! Domain layer containing the guide logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `guide` - Taxonomy, selection wizard and prompt synthesis
//! - `generation` - Streaming generation status, decoding and reports

pub mod foundation;
pub mod generation;
pub mod guide;

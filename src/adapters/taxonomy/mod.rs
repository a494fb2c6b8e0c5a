//! Taxonomy adapters - Implementations of the TaxonomySource port.

mod http_source;
mod in_memory_source;

pub use http_source::{HttpTaxonomyConfig, HttpTaxonomySource, SUCCESS_CODE, TOPIC_ID_PLACEHOLDER};
pub use in_memory_source::InMemoryTaxonomySource;

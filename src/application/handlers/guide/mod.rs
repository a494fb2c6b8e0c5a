//! Guide handlers - Loading the taxonomy and running the wizard.

mod guide_session;
mod load_taxonomy;

pub use guide_session::{FinalizeError, GuideSession};
pub use load_taxonomy::TaxonomyLoader;

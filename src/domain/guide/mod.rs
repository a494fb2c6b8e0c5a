//! Guide module - Topic taxonomy, selection wizard and prompt synthesis.
//!
//! The taxonomy is flattened into a [`SlideDeck`]; a [`SelectionWizard`]
//! walks the deck under user events and, once finalized, hands its selection
//! to the [`PromptSynthesizer`].

mod errors;
mod prompt;
mod selection;
mod slide;
mod taxonomy;
mod wizard;

pub use errors::{PromptError, TaxonomyError, WizardError};
pub use prompt::{PromptSynthesizer, PROMPT_DELIMITER};
pub use selection::{FreeTextValue, SelectionState};
pub use slide::{DetailItem, FreeTextSlot, Slide, SlideDeck, SlideHeading, SlidePosition};
pub use taxonomy::{Detail, Taxonomy, Topic, TopicEntry};
pub use wizard::{
    next_cursor, prev_cursor, reachable_path, transition, FinalizedSelection, SelectionWizard,
    WizardCursor, WizardEvent, WizardProgress, WizardSnapshot,
};

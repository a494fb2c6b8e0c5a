//! PromptSynthesizer - serializes a finalized selection into one prompt.

use super::errors::PromptError;
use super::selection::{FreeTextValue, SelectionState};
use super::slide::{FreeTextSlot, SlideDeck};

/// Separator between prompt parts.
pub const PROMPT_DELIMITER: &str = "|";

/// Deterministic prompt builder.
///
/// Parts are collected in taxonomy order: for every selected topic its
/// selected sentences, then its note when the custom entry is selected; the
/// closing note comes last. The order in which selections were made has no
/// influence on the output.
pub struct PromptSynthesizer;

impl PromptSynthesizer {
    /// Builds the prompt string.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::EmptyPrompt` when no part contributes text.
    pub fn synthesize(deck: &SlideDeck, selection: &SelectionState) -> Result<String, PromptError> {
        let prompt = Self::collect(deck, selection).join(PROMPT_DELIMITER);
        if prompt.is_empty() {
            return Err(PromptError::EmptyPrompt);
        }
        Ok(prompt)
    }

    /// Ordered prompt parts, before joining.
    pub fn collect<'a>(deck: &'a SlideDeck, selection: &'a SelectionState) -> Vec<&'a str> {
        let mut parts = Vec::new();

        for topic in selection.selected_topics() {
            let Some(entry) = deck.taxonomy().entry(topic) else {
                continue;
            };

            parts.extend(
                selection
                    .selected_items(topic)
                    .filter_map(|item| entry.details.get(item))
                    .map(|detail| detail.sentence.as_str()),
            );

            if selection.is_custom_selected(topic) {
                if let Some(text) = selection
                    .note(FreeTextSlot::Topic(topic))
                    .and_then(FreeTextValue::contribution)
                {
                    parts.push(text);
                }
            }
        }

        if let Some(text) = selection
            .note(FreeTextSlot::Closing)
            .and_then(FreeTextValue::contribution)
        {
            parts.push(text);
        }

        parts.retain(|part| !part.is_empty());
        parts
    }
}

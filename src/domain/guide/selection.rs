//! Per-slide selection state of the guide wizard.

use std::collections::BTreeSet;

use super::errors::WizardError;
use super::slide::{FreeTextSlot, SlideDeck};

/// Value of a free-text slide.
///
/// Blank input is stored as "no value"; a value is included in the prompt
/// only while `included` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeTextValue {
    text: Option<String>,
    included: bool,
}

impl FreeTextValue {
    /// Replaces the text. Non-blank text is included automatically.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.trim().is_empty() {
            self.text = None;
            self.included = false;
        } else {
            self.text = Some(text);
            self.included = true;
        }
    }

    /// Marks the text as included or excluded. A missing text is never
    /// included.
    pub fn set_included(&mut self, included: bool) {
        self.included = included && self.text.is_some();
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_included(&self) -> bool {
        self.included
    }

    /// Text that ends up in the prompt, if any.
    pub fn contribution(&self) -> Option<&str> {
        if self.included {
            self.text.as_deref()
        } else {
            None
        }
    }

    /// Clears the value.
    pub fn clear(&mut self) {
        self.text = None;
        self.included = false;
    }
}

/// Selections across every slide of a deck.
///
/// Topic and item sets are ordered by index, so two states holding the same
/// selections compare equal no matter in which order they were made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    topics: BTreeSet<usize>,
    items: Vec<BTreeSet<usize>>,
    item_counts: Vec<usize>,
    topic_notes: Vec<FreeTextValue>,
    closing_note: FreeTextValue,
}

impl SelectionState {
    /// Creates an all-unselected state shaped after a deck.
    pub fn for_deck(deck: &SlideDeck) -> Self {
        let item_counts: Vec<usize> = (0..deck.topic_count())
            .map(|topic| deck.item_count(topic).unwrap_or(1))
            .collect();
        Self::with_item_counts(item_counts)
    }

    /// Creates an all-unselected state from per-topic item counts (custom
    /// entry included).
    pub fn with_item_counts(item_counts: Vec<usize>) -> Self {
        let topic_count = item_counts.len();
        Self {
            topics: BTreeSet::new(),
            items: vec![BTreeSet::new(); topic_count],
            item_counts,
            topic_notes: vec![FreeTextValue::default(); topic_count],
            closing_note: FreeTextValue::default(),
        }
    }

    pub fn topic_count(&self) -> usize {
        self.item_counts.len()
    }

    pub fn is_topic_selected(&self, topic: usize) -> bool {
        self.topics.contains(&topic)
    }

    pub fn has_selected_topic(&self) -> bool {
        !self.topics.is_empty()
    }

    /// Selected topic indices in taxonomy order.
    pub fn selected_topics(&self) -> impl Iterator<Item = usize> + '_ {
        self.topics.iter().copied()
    }

    /// Smallest selected topic strictly after `topic`, or the first selected
    /// topic when `topic` is `None`.
    pub fn next_selected_topic(&self, after: Option<usize>) -> Option<usize> {
        match after {
            Some(topic) => self.topics.range(topic + 1..).next().copied(),
            None => self.topics.iter().next().copied(),
        }
    }

    /// Largest selected topic strictly before `before`.
    pub fn previous_selected_topic(&self, before: usize) -> Option<usize> {
        self.topics.range(..before).next_back().copied()
    }

    /// Selected item indices of a topic in taxonomy order.
    pub fn selected_items(&self, topic: usize) -> impl Iterator<Item = usize> + '_ {
        self.items.get(topic).into_iter().flatten().copied()
    }

    pub fn is_item_selected(&self, topic: usize, item: usize) -> bool {
        self.items.get(topic).is_some_and(|set| set.contains(&item))
    }

    /// Index of a topic's custom entry.
    pub fn custom_item_index(&self, topic: usize) -> Option<usize> {
        self.item_counts.get(topic).and_then(|count| count.checked_sub(1))
    }

    /// Returns true if a topic's custom entry is selected.
    pub fn is_custom_selected(&self, topic: usize) -> bool {
        self.custom_item_index(topic)
            .is_some_and(|custom| self.is_item_selected(topic, custom))
    }

    /// Value of a free-text slot.
    pub fn note(&self, slot: FreeTextSlot) -> Option<&FreeTextValue> {
        match slot {
            FreeTextSlot::Topic(topic) => self.topic_notes.get(topic),
            FreeTextSlot::Closing => Some(&self.closing_note),
        }
    }

    /// Toggles a topic and returns whether it is now selected.
    ///
    /// Deselecting a topic clears everything chosen inside its detail list
    /// and note, so the state never carries selections for unreachable slides.
    pub fn toggle_topic(&mut self, topic: usize) -> Result<bool, WizardError> {
        self.check_topic(topic)?;

        if self.topics.remove(&topic) {
            self.items[topic].clear();
            self.topic_notes[topic].clear();
            Ok(false)
        } else {
            self.topics.insert(topic);
            Ok(true)
        }
    }

    /// Toggles an item on a selected topic's detail list and returns whether
    /// it is now selected.
    pub fn toggle_item(&mut self, topic: usize, item: usize) -> Result<bool, WizardError> {
        self.check_topic(topic)?;
        if !self.is_topic_selected(topic) {
            return Err(WizardError::TopicNotSelected(topic));
        }

        let count = self.item_counts[topic];
        if item >= count {
            return Err(WizardError::ItemOutOfRange { topic, item, count });
        }

        let set = &mut self.items[topic];
        if set.remove(&item) {
            Ok(false)
        } else {
            set.insert(item);
            Ok(true)
        }
    }

    /// Mutable access to a free-text slot.
    pub fn note_mut(&mut self, slot: FreeTextSlot) -> Result<&mut FreeTextValue, WizardError> {
        match slot {
            FreeTextSlot::Topic(topic) => {
                self.check_topic(topic)?;
                if !self.is_topic_selected(topic) {
                    return Err(WizardError::TopicNotSelected(topic));
                }
                Ok(&mut self.topic_notes[topic])
            }
            FreeTextSlot::Closing => Ok(&mut self.closing_note),
        }
    }

    fn check_topic(&self, topic: usize) -> Result<(), WizardError> {
        let count = self.topic_count();
        if topic < count {
            Ok(())
        } else {
            Err(WizardError::TopicOutOfRange {
                index: topic,
                count,
            })
        }
    }
}

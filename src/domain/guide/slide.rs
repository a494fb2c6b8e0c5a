//! Flat slide layout of the guide wizard.
//!
//! The taxonomy is flattened into a fixed sequence:
//!
//! ```text
//! 0          TopicList
//! 2i + 1     DetailList for topic i (details + custom entry)
//! 2i + 2     FreeText note for topic i
//! 2n + 1     closing FreeText
//! ```
//!
//! Positions never move once the deck is built; which of them are visited is
//! decided by the wizard from the current selection.

use std::fmt;

use super::taxonomy::{Taxonomy, Topic};

/// Which free-text slide a note belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FreeTextSlot {
    /// The note paired with a topic's detail list.
    Topic(usize),
    /// The trailing note for anything not covered by a topic.
    Closing,
}

/// Role of a flat position in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlidePosition {
    TopicList,
    DetailList { topic: usize },
    TopicNote { topic: usize },
    ClosingNote,
}

impl SlidePosition {
    /// Position of the slide holding a free-text slot.
    pub fn of_slot(slot: FreeTextSlot) -> Self {
        match slot {
            FreeTextSlot::Topic(topic) => SlidePosition::TopicNote { topic },
            FreeTextSlot::Closing => SlidePosition::ClosingNote,
        }
    }

    /// Returns the topic index for topic-bound positions.
    pub fn topic(&self) -> Option<usize> {
        match self {
            SlidePosition::DetailList { topic } | SlidePosition::TopicNote { topic } => {
                Some(*topic)
            }
            SlidePosition::TopicList | SlidePosition::ClosingNote => None,
        }
    }

    /// Returns the free-text slot for note positions.
    pub fn free_text_slot(&self) -> Option<FreeTextSlot> {
        match self {
            SlidePosition::TopicNote { topic } => Some(FreeTextSlot::Topic(*topic)),
            SlidePosition::ClosingNote => Some(FreeTextSlot::Closing),
            _ => None,
        }
    }
}

impl fmt::Display for SlidePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlidePosition::TopicList => write!(f, "topic list"),
            SlidePosition::DetailList { topic } => write!(f, "detail list of topic {}", topic),
            SlidePosition::TopicNote { topic } => write!(f, "note of topic {}", topic),
            SlidePosition::ClosingNote => write!(f, "closing note"),
        }
    }
}

/// An entry of a topic's detail list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailItem {
    Sentence(String),
    /// Synthetic last entry; selecting it forces the paired note slide.
    Custom { label: String },
}

impl DetailItem {
    /// Text shown for this item.
    pub fn label(&self) -> &str {
        match self {
            DetailItem::Sentence(sentence) => sentence,
            DetailItem::Custom { label } => label,
        }
    }

    /// Returns true for the synthetic custom entry.
    pub fn is_custom(&self) -> bool {
        matches!(self, DetailItem::Custom { .. })
    }
}

/// One addressable step of the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    TopicList { topics: Vec<Topic> },
    DetailList { topic: usize, items: Vec<DetailItem> },
    FreeText { slot: FreeTextSlot },
}

/// Heading the presentation layer shows above a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideHeading<'a> {
    Topics,
    Topic(&'a Topic),
    Closing,
}

/// Immutable, ordered slide sequence built from a taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    taxonomy: Taxonomy,
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Flattens a taxonomy into slides, appending the custom entry to every
    /// detail list and the closing note at the end.
    pub fn build(taxonomy: Taxonomy, custom_entry_label: &str) -> Self {
        let topic_count = taxonomy.topic_count();
        let mut slides = Vec::with_capacity(2 * topic_count + 2);

        slides.push(Slide::TopicList {
            topics: taxonomy.entries().iter().map(|e| e.topic.clone()).collect(),
        });

        for (topic, entry) in taxonomy.entries().iter().enumerate() {
            let mut items: Vec<DetailItem> = entry
                .details
                .iter()
                .map(|d| DetailItem::Sentence(d.sentence.clone()))
                .collect();
            items.push(DetailItem::Custom {
                label: custom_entry_label.to_string(),
            });

            slides.push(Slide::DetailList { topic, items });
            slides.push(Slide::FreeText {
                slot: FreeTextSlot::Topic(topic),
            });
        }

        slides.push(Slide::FreeText {
            slot: FreeTextSlot::Closing,
        });

        Self { taxonomy, slides }
    }

    /// The taxonomy this deck was built from.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// All slides in flat order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide at a flat position.
    pub fn slide(&self, position: usize) -> Option<&Slide> {
        self.slides.get(position)
    }

    /// Total number of slides (`2 * topic_count + 2`).
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// A deck always holds the topic list and the closing note.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn topic_count(&self) -> usize {
        self.taxonomy.topic_count()
    }

    /// Number of items on a topic's detail list, custom entry included.
    pub fn item_count(&self, topic: usize) -> Option<usize> {
        self.taxonomy.entry(topic).map(|e| e.details.len() + 1)
    }

    /// Index of the custom entry on a topic's detail list.
    pub fn custom_item_index(&self, topic: usize) -> Option<usize> {
        self.taxonomy.entry(topic).map(|e| e.details.len())
    }

    pub fn detail_position(&self, topic: usize) -> usize {
        2 * topic + 1
    }

    pub fn topic_note_position(&self, topic: usize) -> usize {
        2 * topic + 2
    }

    pub fn closing_position(&self) -> usize {
        2 * self.topic_count() + 1
    }

    /// Flat position of a free-text slot.
    pub fn free_text_position(&self, slot: FreeTextSlot) -> usize {
        match slot {
            FreeTextSlot::Topic(topic) => self.topic_note_position(topic),
            FreeTextSlot::Closing => self.closing_position(),
        }
    }

    /// Role of a flat position, or `None` past the end of the deck.
    pub fn position(&self, position: usize) -> Option<SlidePosition> {
        if position >= self.len() {
            return None;
        }
        if position == 0 {
            return Some(SlidePosition::TopicList);
        }
        if position == self.closing_position() {
            return Some(SlidePosition::ClosingNote);
        }

        let topic = (position - 1) / 2;
        if position % 2 == 1 {
            Some(SlidePosition::DetailList { topic })
        } else {
            Some(SlidePosition::TopicNote { topic })
        }
    }

    /// Heading for the slide at a flat position.
    pub fn heading(&self, position: usize) -> Option<SlideHeading<'_>> {
        match self.position(position)? {
            SlidePosition::TopicList => Some(SlideHeading::Topics),
            SlidePosition::ClosingNote => Some(SlideHeading::Closing),
            SlidePosition::DetailList { topic } | SlidePosition::TopicNote { topic } => self
                .taxonomy
                .entry(topic)
                .map(|e| SlideHeading::Topic(&e.topic)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TopicId;
    use crate::domain::guide::taxonomy::{Detail, TopicEntry};

    fn walk_and_meal() -> SlideDeck {
        let walk = TopicId::new(1);
        let meal = TopicId::new(2);
        let taxonomy = Taxonomy::new(vec![
            TopicEntry::new(
                Topic::new(walk, "Walk", "Outdoor time"),
                vec![Detail::new(walk, "Park"), Detail::new(walk, "Trail")],
            ),
            TopicEntry::new(
                Topic::new(meal, "Meal", "Food"),
                vec![Detail::new(meal, "Breakfast")],
            ),
        ]);
        SlideDeck::build(taxonomy, "Write my own")
    }

    #[test]
    fn deck_has_two_slides_per_topic_plus_two() {
        let deck = walk_and_meal();
        assert_eq!(deck.len(), 6);
        assert_eq!(deck.closing_position(), 5);
    }

    #[test]
    fn empty_taxonomy_still_has_topic_list_and_closing_note() {
        let deck = SlideDeck::build(Taxonomy::default(), "Write my own");
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.position(0), Some(SlidePosition::TopicList));
        assert_eq!(deck.position(1), Some(SlidePosition::ClosingNote));
    }

    #[test]
    fn positions_follow_pair_layout() {
        let deck = walk_and_meal();
        assert_eq!(deck.position(0), Some(SlidePosition::TopicList));
        assert_eq!(deck.position(1), Some(SlidePosition::DetailList { topic: 0 }));
        assert_eq!(deck.position(2), Some(SlidePosition::TopicNote { topic: 0 }));
        assert_eq!(deck.position(3), Some(SlidePosition::DetailList { topic: 1 }));
        assert_eq!(deck.position(4), Some(SlidePosition::TopicNote { topic: 1 }));
        assert_eq!(deck.position(5), Some(SlidePosition::ClosingNote));
        assert_eq!(deck.position(6), None);
    }

    #[test]
    fn detail_lists_end_with_custom_entry() {
        let deck = walk_and_meal();
        match deck.slide(1) {
            Some(Slide::DetailList { topic, items }) => {
                assert_eq!(*topic, 0);
                let labels: Vec<_> = items.iter().map(DetailItem::label).collect();
                assert_eq!(labels, vec!["Park", "Trail", "Write my own"]);
                assert!(items[2].is_custom());
            }
            other => panic!("expected detail list, got {:?}", other),
        }
        assert_eq!(deck.custom_item_index(0), Some(2));
        assert_eq!(deck.item_count(1), Some(2));
    }

    #[test]
    fn free_text_slides_carry_their_slot() {
        let deck = walk_and_meal();
        assert_eq!(
            deck.slide(4),
            Some(&Slide::FreeText {
                slot: FreeTextSlot::Topic(1)
            })
        );
        assert_eq!(
            deck.slide(5),
            Some(&Slide::FreeText {
                slot: FreeTextSlot::Closing
            })
        );
        assert_eq!(deck.free_text_position(FreeTextSlot::Topic(1)), 4);
        assert_eq!(deck.free_text_position(FreeTextSlot::Closing), 5);
    }

    #[test]
    fn headings_name_the_topic_of_a_pair() {
        let deck = walk_and_meal();
        assert_eq!(deck.heading(0), Some(SlideHeading::Topics));
        match deck.heading(4) {
            Some(SlideHeading::Topic(topic)) => assert_eq!(topic.label, "Meal"),
            other => panic!("unexpected heading {:?}", other),
        }
        assert_eq!(deck.heading(5), Some(SlideHeading::Closing));
    }
}

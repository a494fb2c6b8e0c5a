//! SelectionWizard - branching navigation over the flat slide deck.
//!
//! The wizard is a finite state machine whose transition function
//! [`transition`] is pure: `(deck, snapshot, event) -> snapshot`. The
//! [`SelectionWizard`] wrapper only keeps the current snapshot and replaces it
//! when an event is accepted.
//!
//! # Navigation rules
//!
//! - Only topics selected on the topic list are visited; their detail list and
//!   note are skipped otherwise.
//! - A topic's note is visited only when its custom entry is selected.
//! - The closing note is always reachable and is the only slide from which
//!   the wizard can be finalized.
//!
//! Because `next` and `prev` look only at the selection and the cursor, the
//! same selection always yields the same path regardless of history.
//!
//! # Example
//!
//! ```ignore
//! let mut wizard = SelectionWizard::new(deck);
//! wizard.toggle_topic(0)?;
//! wizard.next()?;                  // detail list of topic 0
//! wizard.toggle_detail_item(0, 0)?;
//! wizard.next()?;                  // closing note
//! let prompt = wizard.finalize()?.synthesize_prompt()?;
//! ```

use std::fmt;
use std::sync::Arc;

use super::errors::{PromptError, WizardError};
use super::prompt::PromptSynthesizer;
use super::selection::SelectionState;
use super::slide::{FreeTextSlot, Slide, SlideDeck, SlideHeading, SlidePosition};

/// Current flat slide position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct WizardCursor(usize);

impl WizardCursor {
    /// The topic list, where every wizard starts.
    pub const START: WizardCursor = WizardCursor(0);

    pub fn new(position: usize) -> Self {
        Self(position)
    }

    pub fn position(&self) -> usize {
        self.0
    }
}

impl fmt::Display for WizardCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discrete user event.
///
/// Mutating events are bound to the slide they target: a topic can only be
/// toggled on the topic list, a detail item only on its own detail list and
/// a note only on its own free-text slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    ToggleTopic { topic: usize },
    ToggleDetailItem { topic: usize, item: usize },
    SetFreeText { slot: FreeTextSlot, text: String },
    SetFreeTextIncluded { slot: FreeTextSlot, included: bool },
    Next,
    Prev,
}

/// Selection plus cursor; the complete state of the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSnapshot {
    selection: SelectionState,
    cursor: WizardCursor,
}

impl WizardSnapshot {
    /// All-unselected state positioned on the topic list.
    pub fn initial(deck: &SlideDeck) -> Self {
        Self {
            selection: SelectionState::for_deck(deck),
            cursor: WizardCursor::START,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn cursor(&self) -> WizardCursor {
        self.cursor
    }
}

/// Applies one event to a snapshot.
///
/// Returns the successor snapshot, or the reason the event was rejected. The
/// input snapshot is never modified.
pub fn transition(
    deck: &SlideDeck,
    snapshot: &WizardSnapshot,
    event: &WizardEvent,
) -> Result<WizardSnapshot, WizardError> {
    let current = position_of(deck, snapshot.cursor)?;
    let mut next = snapshot.clone();

    match event {
        WizardEvent::ToggleTopic { topic } => {
            require_slide(current, SlidePosition::TopicList)?;
            next.selection.toggle_topic(*topic)?;
        }
        WizardEvent::ToggleDetailItem { topic, item } => {
            require_slide(current, SlidePosition::DetailList { topic: *topic })?;
            next.selection.toggle_item(*topic, *item)?;
        }
        WizardEvent::SetFreeText { slot, text } => {
            require_slide(current, SlidePosition::of_slot(*slot))?;
            next.selection.note_mut(*slot)?.set_text(text.clone());
        }
        WizardEvent::SetFreeTextIncluded { slot, included } => {
            require_slide(current, SlidePosition::of_slot(*slot))?;
            next.selection.note_mut(*slot)?.set_included(*included);
        }
        WizardEvent::Next => {
            next.cursor = next_cursor(deck, &snapshot.selection, current)?;
        }
        WizardEvent::Prev => {
            next.cursor = prev_cursor(deck, &snapshot.selection, current)?;
        }
    }

    Ok(next)
}

/// Forward move from `current`.
pub fn next_cursor(
    deck: &SlideDeck,
    selection: &SelectionState,
    current: SlidePosition,
) -> Result<WizardCursor, WizardError> {
    let position = match current {
        SlidePosition::TopicList => selection
            .next_selected_topic(None)
            .map(|topic| deck.detail_position(topic))
            .ok_or(WizardError::NoTopicSelected)?,
        SlidePosition::DetailList { topic } if selection.is_custom_selected(topic) => {
            deck.topic_note_position(topic)
        }
        SlidePosition::DetailList { topic } | SlidePosition::TopicNote { topic } => selection
            .next_selected_topic(Some(topic))
            .map(|next| deck.detail_position(next))
            .unwrap_or_else(|| deck.closing_position()),
        SlidePosition::ClosingNote => return Err(WizardError::AtTerminalSlide),
    };
    Ok(WizardCursor(position))
}

/// Backward move from `current`; the mirror image of [`next_cursor`].
pub fn prev_cursor(
    deck: &SlideDeck,
    selection: &SelectionState,
    current: SlidePosition,
) -> Result<WizardCursor, WizardError> {
    let position = match current {
        SlidePosition::TopicList => return Err(WizardError::AtFirstSlide),
        SlidePosition::TopicNote { topic } => deck.detail_position(topic),
        SlidePosition::DetailList { topic } => last_slide_before(deck, selection, topic),
        SlidePosition::ClosingNote => last_slide_before(deck, selection, deck.topic_count()),
    };
    Ok(WizardCursor(position))
}

/// Last visited slide of the nearest selected topic before `topic`, or the
/// topic list when there is none.
fn last_slide_before(deck: &SlideDeck, selection: &SelectionState, topic: usize) -> usize {
    match selection.previous_selected_topic(topic) {
        Some(previous) if selection.is_custom_selected(previous) => {
            deck.topic_note_position(previous)
        }
        Some(previous) => deck.detail_position(previous),
        None => WizardCursor::START.0,
    }
}

/// Every slide visited walking forward from the topic list to the closing
/// note under the given selection.
pub fn reachable_path(deck: &SlideDeck, selection: &SelectionState) -> Vec<WizardCursor> {
    let mut path = vec![WizardCursor::START];
    let mut current = SlidePosition::TopicList;

    if !selection.has_selected_topic() {
        path.push(WizardCursor(deck.closing_position()));
        return path;
    }

    while let Ok(cursor) = next_cursor(deck, selection, current) {
        path.push(cursor);
        match deck.position(cursor.0) {
            Some(position) => current = position,
            None => break,
        }
    }
    path
}

fn position_of(deck: &SlideDeck, cursor: WizardCursor) -> Result<SlidePosition, WizardError> {
    deck.position(cursor.0)
        .ok_or(WizardError::CursorOutOfRange {
            position: cursor.0,
            len: deck.len(),
        })
}

fn require_slide(actual: SlidePosition, expected: SlidePosition) -> Result<(), WizardError> {
    if actual == expected {
        Ok(())
    } else {
        Err(WizardError::NotOnSlide { expected, actual })
    }
}

/// Step counter for the wizard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardProgress {
    /// 1-based step of the cursor on the reachable path.
    pub step: usize,
    /// Number of slides on the reachable path.
    pub total: usize,
}

/// Stateful wrapper around [`transition`].
#[derive(Debug, Clone)]
pub struct SelectionWizard {
    deck: Arc<SlideDeck>,
    snapshot: WizardSnapshot,
}

impl SelectionWizard {
    /// Creates a wizard on the topic list with nothing selected.
    pub fn new(deck: Arc<SlideDeck>) -> Self {
        let snapshot = WizardSnapshot::initial(&deck);
        Self { deck, snapshot }
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn snapshot(&self) -> &WizardSnapshot {
        &self.snapshot
    }

    pub fn selection(&self) -> &SelectionState {
        &self.snapshot.selection
    }

    pub fn cursor(&self) -> WizardCursor {
        self.snapshot.cursor
    }

    /// Role of the current slide.
    pub fn position(&self) -> Option<SlidePosition> {
        self.deck.position(self.snapshot.cursor.0)
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.slide(self.snapshot.cursor.0)
    }

    pub fn heading(&self) -> Option<SlideHeading<'_>> {
        self.deck.heading(self.snapshot.cursor.0)
    }

    /// Slides the user will pass through with the current selection.
    pub fn reachable_path(&self) -> Vec<WizardCursor> {
        reachable_path(&self.deck, &self.snapshot.selection)
    }

    pub fn progress(&self) -> WizardProgress {
        let path = self.reachable_path();
        let step = path
            .iter()
            .position(|cursor| *cursor == self.snapshot.cursor)
            .map_or(0, |index| index + 1);
        WizardProgress {
            step,
            total: path.len(),
        }
    }

    /// Applies an event; on rejection the wizard is left unchanged.
    pub fn dispatch(&mut self, event: WizardEvent) -> Result<WizardCursor, WizardError> {
        self.snapshot = transition(&self.deck, &self.snapshot, &event)?;
        Ok(self.snapshot.cursor)
    }

    pub fn toggle_topic(&mut self, topic: usize) -> Result<(), WizardError> {
        self.dispatch(WizardEvent::ToggleTopic { topic }).map(|_| ())
    }

    pub fn toggle_detail_item(&mut self, topic: usize, item: usize) -> Result<(), WizardError> {
        self.dispatch(WizardEvent::ToggleDetailItem { topic, item })
            .map(|_| ())
    }

    pub fn set_free_text(
        &mut self,
        slot: FreeTextSlot,
        text: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.dispatch(WizardEvent::SetFreeText {
            slot,
            text: text.into(),
        })
        .map(|_| ())
    }

    pub fn set_free_text_included(
        &mut self,
        slot: FreeTextSlot,
        included: bool,
    ) -> Result<(), WizardError> {
        self.dispatch(WizardEvent::SetFreeTextIncluded { slot, included })
            .map(|_| ())
    }

    pub fn next(&mut self) -> Result<WizardCursor, WizardError> {
        self.dispatch(WizardEvent::Next)
    }

    pub fn prev(&mut self) -> Result<WizardCursor, WizardError> {
        self.dispatch(WizardEvent::Prev)
    }

    /// Returns true when the cursor is on the closing note.
    pub fn is_at_closing_slide(&self) -> bool {
        self.snapshot.cursor.0 == self.deck.closing_position()
    }

    /// Leaves the wizard with the final selection.
    ///
    /// Valid only on the closing note and only with at least one topic
    /// selected. The wizard itself is not consumed so a rejected finalize
    /// leaves it usable.
    pub fn finalize(&self) -> Result<FinalizedSelection, WizardError> {
        if !self.is_at_closing_slide() {
            return Err(WizardError::NotAtTerminalSlide);
        }
        if !self.snapshot.selection.has_selected_topic() {
            return Err(WizardError::IncompleteSelection);
        }

        Ok(FinalizedSelection {
            deck: Arc::clone(&self.deck),
            selection: self.snapshot.selection.clone(),
        })
    }
}

/// Final selection handed from the wizard to prompt synthesis.
#[derive(Debug, Clone)]
pub struct FinalizedSelection {
    deck: Arc<SlideDeck>,
    selection: SelectionState,
}

impl FinalizedSelection {
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Serializes the selection into the generation prompt.
    pub fn synthesize_prompt(&self) -> Result<String, PromptError> {
        PromptSynthesizer::synthesize(&self.deck, &self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TopicId;
    use crate::domain::guide::taxonomy::{Detail, Taxonomy, Topic, TopicEntry};

    /// Walk (Park, Trail), Meal (Breakfast), Nap (no details).
    fn deck() -> Arc<SlideDeck> {
        let entries = [
            ("Walk", vec!["Park", "Trail"]),
            ("Meal", vec!["Breakfast"]),
            ("Nap", vec![]),
        ]
        .into_iter()
        .enumerate()
        .map(|(index, (label, sentences))| {
            let id = TopicId::new(index as i64 + 1);
            TopicEntry::new(
                Topic::new(id, label, ""),
                sentences.into_iter().map(|s| Detail::new(id, s)).collect(),
            )
        })
        .collect();
        Arc::new(SlideDeck::build(Taxonomy::new(entries), "Write my own"))
    }

    fn positions(path: &[WizardCursor]) -> Vec<usize> {
        path.iter().map(WizardCursor::position).collect()
    }

    mod forward {
        use super::*;

        #[test]
        fn next_without_topics_is_a_validation_failure() {
            let mut wizard = SelectionWizard::new(deck());
            let err = wizard.next().unwrap_err();
            assert_eq!(err, WizardError::NoTopicSelected);
            assert!(err.is_validation());
            assert_eq!(wizard.cursor(), WizardCursor::START);
        }

        #[test]
        fn next_from_topic_list_goes_to_first_selected_topic() {
            let mut wizard = SelectionWizard::new(deck());
            wizard.toggle_topic(2).unwrap();
            wizard.toggle_topic(1).unwrap();
            assert_eq!(wizard.next().unwrap().position(), 3);
        }

        #[test]
        fn custom_entry_forces_the_paired_note() {
            let mut wizard = SelectionWizard::new(deck());
            wizard.toggle_topic(0).unwrap();
            wizard.toggle_topic(1).unwrap();
            wizard.next().unwrap();
            wizard.toggle_detail_item(0, 0).unwrap();
            wizard.toggle_detail_item(0, 2).unwrap();

            assert_eq!(wizard.next().unwrap().position(), 2);
            assert_eq!(wizard.next().unwrap().position(), 3);
        }

        #[test]
        fn unselected_custom_entry_skips_the_note() {
            let mut wizard = SelectionWizard::new(deck());
            wizard.toggle_topic(0).unwrap();
            wizard.toggle_topic(2).unwrap();
            wizard.next().unwrap();
            wizard.toggle_detail_item(0, 1).unwrap();

            assert_eq!(wizard.next().unwrap().position(), 5);
            assert_eq!(wizard.next().unwrap().position(), 7);
        }

        #[test]
        fn next_on_closing_note_is_rejected() {
            let mut wizard = SelectionWizard::new(deck());
            wizard.toggle_topic(1).unwrap();
            wizard.next().unwrap();
            wizard.next().unwrap();
            assert!(wizard.is_at_closing_slide());
            assert_eq!(wizard.next(), Err(WizardError::AtTerminalSlide));
        }
    }

    mod backward {
        use super::*;

        #[test]
        fn prev_on_topic_list_is_rejected() {
            let mut wizard = SelectionWizard::new(deck());
            assert_eq!(wizard.prev(), Err(WizardError::AtFirstSlide));
        }

        #[test]
        fn prev_retraces_the_forward_path() {
            let mut wizard = SelectionWizard::new(deck());
            wizard.toggle_topic(0).unwrap();
            wizard.toggle_topic(2).unwrap();
            wizard.next().unwrap();
            wizard.toggle_detail_item(0, 2).unwrap();
            wizard.next().unwrap();
            wizard.next().unwrap();
            wizard.toggle_detail_item(2, 0).unwrap();

            let mut forward = vec![wizard.cursor()];
            while let Ok(cursor) = wizard.next() {
                forward.push(cursor);
            }
            let mut backward = vec![wizard.cursor()];
            while let Ok(cursor) = wizard.prev() {
                backward.push(cursor);
            }
            backward.reverse();

            assert_eq!(positions(&backward), vec![0, 1, 2, 5, 6, 7]);
            assert!(backward.ends_with(&forward));
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn events_are_bound_to_their_slide() {
            let mut wizard = SelectionWizard::new(deck());
            assert!(matches!(
                wizard.toggle_detail_item(0, 0),
                Err(WizardError::NotOnSlide { .. })
            ));

            wizard.toggle_topic(0).unwrap();
            wizard.next().unwrap();
            assert!(matches!(
                wizard.toggle_topic(1),
                Err(WizardError::NotOnSlide { .. })
            ));
        }

        #[test]
        fn deselecting_a_topic_clears_its_pair() {
            let mut wizard = SelectionWizard::new(deck());
            wizard.toggle_topic(0).unwrap();
            wizard.next().unwrap();
            wizard.toggle_detail_item(0, 2).unwrap();
            wizard.next().unwrap();
            wizard.set_free_text(FreeTextSlot::Topic(0), "ran a lot").unwrap();

            wizard.prev().unwrap();
            wizard.prev().unwrap();
            wizard.toggle_topic(0).unwrap();
            wizard.toggle_topic(0).unwrap();

            let fresh = {
                let mut other = SelectionWizard::new(deck());
                other.toggle_topic(0).unwrap();
                other
            };
            assert_eq!(wizard.selection(), fresh.selection());
            assert_eq!(wizard.reachable_path(), fresh.reachable_path());
        }

        #[test]
        fn rejected_event_leaves_snapshot_untouched() {
            let mut wizard = SelectionWizard::new(deck());
            wizard.toggle_topic(0).unwrap();
            let before = wizard.snapshot().clone();

            assert!(wizard.toggle_topic(9).is_err());
            assert_eq!(wizard.snapshot(), &before);
        }
    }

    mod pure_transition {
        use super::*;

        #[test]
        fn transition_does_not_touch_its_input() {
            let deck = deck();
            let initial = WizardSnapshot::initial(&deck);
            let toggled =
                transition(&deck, &initial, &WizardEvent::ToggleTopic { topic: 1 }).unwrap();

            assert!(!initial.selection().is_topic_selected(1));
            assert!(toggled.selection().is_topic_selected(1));
            assert_eq!(toggled.cursor(), WizardCursor::START);
        }

        #[test]
        fn identical_snapshots_navigate_identically() {
            let deck = deck();
            let mut a = WizardSnapshot::initial(&deck);
            let mut b = WizardSnapshot::initial(&deck);
            for topic in [2, 0] {
                a = transition(&deck, &a, &WizardEvent::ToggleTopic { topic }).unwrap();
            }
            for topic in [0, 2] {
                b = transition(&deck, &b, &WizardEvent::ToggleTopic { topic }).unwrap();
            }

            assert_eq!(a, b);
            assert_eq!(
                reachable_path(&deck, a.selection()),
                reachable_path(&deck, b.selection())
            );
        }
    }

    mod progress {
        use super::*;

        #[test]
        fn empty_selection_path_is_topic_list_then_closing() {
            let wizard = SelectionWizard::new(deck());
            assert_eq!(positions(&wizard.reachable_path()), vec![0, 7]);
            assert_eq!(wizard.progress(), WizardProgress { step: 1, total: 2 });
        }

        #[test]
        fn progress_counts_only_reachable_slides() {
            let mut wizard = SelectionWizard::new(deck());
            wizard.toggle_topic(1).unwrap();
            wizard.next().unwrap();
            wizard.toggle_detail_item(1, 1).unwrap();

            assert_eq!(positions(&wizard.reachable_path()), vec![0, 3, 4, 7]);
            assert_eq!(wizard.progress(), WizardProgress { step: 2, total: 4 });
        }

        #[test]
        fn heading_follows_cursor() {
            let mut wizard = SelectionWizard::new(deck());
            assert_eq!(wizard.heading(), Some(SlideHeading::Topics));
            wizard.toggle_topic(1).unwrap();
            wizard.next().unwrap();
            match wizard.heading() {
                Some(SlideHeading::Topic(topic)) => assert_eq!(topic.label, "Meal"),
                other => panic!("unexpected heading {:?}", other),
            }
        }
    }

    mod finalize {
        use super::*;

        #[test]
        fn finalize_requires_closing_slide() {
            let mut wizard = SelectionWizard::new(deck());
            wizard.toggle_topic(0).unwrap();
            assert!(matches!(
                wizard.finalize(),
                Err(WizardError::NotAtTerminalSlide)
            ));
        }

        #[test]
        fn finalize_requires_a_topic() {
            // next() refuses to leave the topic list without a topic, so the
            // cursor is placed on the closing note directly.
            let mut wizard = SelectionWizard::new(deck());
            wizard.toggle_topic(1).unwrap();
            wizard.next().unwrap();
            wizard.prev().unwrap();
            wizard.toggle_topic(1).unwrap();
            assert_eq!(wizard.next(), Err(WizardError::NoTopicSelected));

            let snapshot = WizardSnapshot {
                selection: wizard.selection().clone(),
                cursor: WizardCursor(wizard.deck().closing_position()),
            };
            let stuck = SelectionWizard {
                deck: deck(),
                snapshot,
            };
            assert!(matches!(
                stuck.finalize(),
                Err(WizardError::IncompleteSelection)
            ));
        }

        #[test]
        fn finalized_selection_synthesizes_prompt() {
            let mut wizard = SelectionWizard::new(deck());
            wizard.toggle_topic(1).unwrap();
            wizard.next().unwrap();
            wizard.toggle_detail_item(1, 0).unwrap();
            wizard.next().unwrap();

            let finalized = wizard.finalize().unwrap();
            assert_eq!(finalized.synthesize_prompt().unwrap(), "Breakfast");
        }
    }
}

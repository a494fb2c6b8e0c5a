//! Property tests for wizard navigation and prompt synthesis.
//!
//! Decks are generated with 1 to 5 topics of 0 to 3 details each; selections
//! pick arbitrary topics and items, custom entries included.

use std::sync::Arc;

use proptest::prelude::*;

use diary_guide::domain::foundation::TopicId;
use diary_guide::domain::guide::{
    next_cursor, prev_cursor, reachable_path, Detail, FreeTextSlot, PromptSynthesizer,
    SelectionState, SelectionWizard, SlideDeck, SlidePosition, Taxonomy, Topic, TopicEntry,
    WizardCursor,
};

fn build_deck(detail_counts: &[usize]) -> SlideDeck {
    let entries = detail_counts
        .iter()
        .enumerate()
        .map(|(index, count)| {
            let id = TopicId::new(index as i64 + 1);
            let details = (0..*count)
                .map(|d| Detail::new(id, format!("topic {} detail {}", index, d)))
                .collect();
            TopicEntry::new(Topic::new(id, format!("Topic {}", index), ""), details)
        })
        .collect();
    SlideDeck::build(Taxonomy::new(entries), "Write my own")
}

/// Per topic: selected flag and selected item indices (custom entry is the
/// index equal to the detail count).
type Picks = Vec<(bool, Vec<usize>)>;

fn deck_and_picks() -> impl Strategy<Value = (Vec<usize>, Picks)> {
    prop::collection::vec(0usize..4, 1..6).prop_flat_map(|counts| {
        let picks = counts
            .iter()
            .map(|count| {
                (
                    any::<bool>(),
                    prop::collection::vec(0..=*count, 0..=count + 1),
                )
            })
            .collect::<Vec<_>>();
        (Just(counts), picks)
    })
}

fn apply(deck: &SlideDeck, picks: &Picks, reverse: bool) -> SelectionState {
    let mut selection = SelectionState::for_deck(deck);
    let mut order: Vec<usize> = (0..picks.len()).collect();
    if reverse {
        order.reverse();
    }

    for topic in order {
        let (selected, items) = &picks[topic];
        if !selected {
            continue;
        }
        selection.toggle_topic(topic).unwrap();

        let mut items = items.clone();
        items.sort_unstable();
        items.dedup();
        if reverse {
            items.reverse();
        }
        for item in items {
            selection.toggle_item(topic, item).unwrap();
        }
        if selection.is_custom_selected(topic) {
            selection
                .note_mut(FreeTextSlot::Topic(topic))
                .unwrap()
                .set_text(format!("note {}", topic));
        }
    }
    selection
}

/// Drives a wizard through the picks with events, returning it on the
/// closing note together with the visited cursors.
fn walk_forward(deck: SlideDeck, picks: &Picks) -> (SelectionWizard, Vec<WizardCursor>) {
    let mut wizard = SelectionWizard::new(Arc::new(deck));
    for (topic, (selected, _)) in picks.iter().enumerate() {
        if *selected {
            wizard.toggle_topic(topic).unwrap();
        }
    }

    let mut visited = vec![wizard.cursor()];
    while !wizard.is_at_closing_slide() {
        match wizard.position() {
            Some(SlidePosition::DetailList { topic }) => {
                let mut items = picks[topic].1.clone();
                items.sort_unstable();
                items.dedup();
                for item in items {
                    wizard.toggle_detail_item(topic, item).unwrap();
                }
            }
            Some(SlidePosition::TopicNote { topic }) => {
                wizard
                    .set_free_text(FreeTextSlot::Topic(topic), format!("note {}", topic))
                    .unwrap();
            }
            _ => {}
        }
        visited.push(wizard.next().unwrap());
    }
    (wizard, visited)
}

proptest! {
    #[test]
    fn walking_back_reverses_the_forward_path((counts, picks) in deck_and_picks()) {
        prop_assume!(picks.iter().any(|(selected, _)| *selected));
        let (mut wizard, forward) = walk_forward(build_deck(&counts), &picks);

        prop_assert_eq!(&forward, &wizard.reachable_path());

        let mut backward = vec![wizard.cursor()];
        while wizard.cursor() != WizardCursor::START {
            backward.push(wizard.prev().unwrap());
        }
        backward.reverse();
        prop_assert_eq!(backward, forward);
    }

    #[test]
    fn custom_entry_forces_its_note((counts, picks) in deck_and_picks()) {
        let deck = build_deck(&counts);
        let selection = apply(&deck, &picks, false);

        for topic in selection.selected_topics() {
            let cursor = next_cursor(&deck, &selection, SlidePosition::DetailList { topic }).unwrap();
            if selection.is_custom_selected(topic) {
                prop_assert_eq!(cursor.position(), deck.topic_note_position(topic));
            } else {
                prop_assert_ne!(cursor.position(), deck.topic_note_position(topic));
            }
        }
    }

    #[test]
    fn path_runs_from_topic_list_to_closing_note((counts, picks) in deck_and_picks()) {
        let deck = build_deck(&counts);
        let selection = apply(&deck, &picks, false);
        let path = reachable_path(&deck, &selection);

        prop_assert_eq!(path.first().copied(), Some(WizardCursor::START));
        prop_assert_eq!(path.last().map(WizardCursor::position), Some(deck.closing_position()));
        prop_assert!(path.windows(2).all(|pair| pair[0].position() < pair[1].position()));
    }

    #[test]
    fn path_visits_exactly_the_selected_slides((counts, picks) in deck_and_picks()) {
        let deck = build_deck(&counts);
        let selection = apply(&deck, &picks, false);
        let positions: Vec<usize> = reachable_path(&deck, &selection)
            .iter()
            .map(WizardCursor::position)
            .collect();

        for topic in 0..deck.topic_count() {
            prop_assert_eq!(
                positions.contains(&deck.detail_position(topic)),
                selection.is_topic_selected(topic)
            );
            prop_assert_eq!(
                positions.contains(&deck.topic_note_position(topic)),
                selection.is_custom_selected(topic)
            );
        }
    }

    #[test]
    fn prev_retraces_next((counts, picks) in deck_and_picks()) {
        let deck = build_deck(&counts);
        let selection = apply(&deck, &picks, false);
        prop_assume!(selection.has_selected_topic());

        let path = reachable_path(&deck, &selection);
        for pair in path.windows(2) {
            let from = deck.position(pair[0].position()).unwrap();
            let to = deck.position(pair[1].position()).unwrap();
            prop_assert_eq!(next_cursor(&deck, &selection, from).unwrap(), pair[1]);
            prop_assert_eq!(prev_cursor(&deck, &selection, to).unwrap(), pair[0]);
        }
    }

    #[test]
    fn prompt_ignores_selection_order((counts, picks) in deck_and_picks()) {
        let deck = build_deck(&counts);
        let forward = apply(&deck, &picks, false);
        let backward = apply(&deck, &picks, true);

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(
            PromptSynthesizer::synthesize(&deck, &forward),
            PromptSynthesizer::synthesize(&deck, &backward)
        );
    }
}

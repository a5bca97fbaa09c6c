use std::sync::Once;

use ego_tree::Tree;
use outline_core::{decide, entry_id, Entry, PublishDecision, Snapshot};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(outline_logging::initialize_for_tests);
}

fn snapshot_of(texts: &[&str]) -> Snapshot {
    let mut tree = Tree::new(());
    let mut entries = Vec::with_capacity(texts.len());
    for (index, text) in texts.iter().enumerate() {
        entries.push(Entry {
            id: entry_id(index),
            text: (*text).to_string(),
            node: tree.root_mut().append(()).id(),
        });
    }
    Snapshot::new(entries)
}

#[test]
fn ids_match_position_in_the_snapshot() {
    init_logging();
    let snapshot = snapshot_of(&["A", "B", "C"]);

    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.entries()[0].id, "query-0");
    assert_eq!(snapshot.entries()[2].id, "query-2");
    assert_eq!(snapshot.last().unwrap().text, "C");
}

#[test]
fn length_change_replaces() {
    init_logging();
    let previous = snapshot_of(&["A", "B"]);

    let grown = snapshot_of(&["A", "B", "C"]);
    assert_eq!(decide(&previous, &grown), PublishDecision::Replace);

    let shrunk = snapshot_of(&["A"]);
    assert_eq!(decide(&previous, &shrunk), PublishDecision::Replace);
}

#[test]
fn empty_to_first_entry_replaces() {
    init_logging();
    let previous = Snapshot::empty();
    let fresh = snapshot_of(&["Hello"]);

    assert_eq!(decide(&previous, &fresh), PublishDecision::Replace);
}

#[test]
fn both_empty_retains() {
    init_logging();
    assert_eq!(
        decide(&Snapshot::empty(), &Snapshot::empty()),
        PublishDecision::Retain
    );
}

#[test]
fn last_entry_text_change_replaces() {
    init_logging();
    let previous = snapshot_of(&["A", "B"]);
    let fresh = snapshot_of(&["A", "B streamed more"]);

    assert_eq!(decide(&previous, &fresh), PublishDecision::Replace);
}

#[test]
fn earlier_entry_edits_do_not_trigger_republish() {
    init_logging();
    let previous = snapshot_of(&["A", "B"]);
    let fresh = snapshot_of(&["A edited", "B"]);

    // Only the last entry is inspected; earlier edits are deliberately missed.
    assert_eq!(decide(&previous, &fresh), PublishDecision::Retain);
}

#[test]
fn identical_texts_retain() {
    init_logging();
    let previous = snapshot_of(&["A", "B"]);
    let fresh = snapshot_of(&["A", "B"]);

    assert_eq!(decide(&previous, &fresh), PublishDecision::Retain);
}

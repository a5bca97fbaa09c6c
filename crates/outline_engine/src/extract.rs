use outline_core::{display_text, entry_id, Entry, Snapshot};
use outline_logging::outline_trace;
use scraper::Html;

use crate::strategy::SelectorStrategy;

/// One extraction pass over the current document markup.
///
/// Deterministic: equal markup yields value-equal snapshots. Candidates whose
/// trimmed text is empty are dropped before ids are assigned, so ids always
/// match the position in the filtered output.
pub struct UserMessageExtractor {
    strategy: SelectorStrategy,
}

impl UserMessageExtractor {
    pub fn new() -> Self {
        Self {
            strategy: SelectorStrategy::new(),
        }
    }

    pub fn extract(&self, markup: &str) -> Snapshot {
        let pass = outline_logging::next_pass_seq();
        let doc = Html::parse_document(markup);
        let mut entries: Vec<Entry> = Vec::new();
        for element in self.strategy.candidates(&doc) {
            let raw: String = element.text().collect();
            let Some(text) = display_text(&raw) else {
                continue;
            };
            entries.push(Entry {
                id: entry_id(entries.len()),
                text,
                node: element.id(),
            });
        }
        outline_trace!("pass {pass}: extracted {} entries", entries.len());
        Snapshot::new(entries)
    }
}

impl Default for UserMessageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

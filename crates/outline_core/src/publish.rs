use crate::Snapshot;

/// Outcome of comparing a freshly extracted snapshot against the published
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishDecision {
    /// The fresh snapshot replaces the published one.
    Replace,
    /// The published snapshot stays current, same reference.
    Retain,
}

/// Cheap replace-or-retain heuristic for streaming updates.
///
/// Change batches arrive at high frequency while a response streams in, so a
/// full comparison per batch would republish far too often. The heuristic
/// assumes edits concentrate on the newest entry: a length change or a text
/// change in the last entry replaces the snapshot; anything else retains it,
/// even if an earlier entry's underlying text changed.
pub fn decide(previous: &Snapshot, fresh: &Snapshot) -> PublishDecision {
    if previous.len() != fresh.len() {
        return PublishDecision::Replace;
    }
    match (previous.last(), fresh.last()) {
        (Some(prev_last), Some(fresh_last)) if prev_last.text != fresh_last.text => {
            PublishDecision::Replace
        }
        _ => PublishDecision::Retain,
    }
}

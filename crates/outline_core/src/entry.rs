use ego_tree::NodeId;

/// One extracted user-message reference.
///
/// `node` is a non-owning back-reference into the document tree the entry was
/// extracted from; it is only meaningful for later interaction (scroll,
/// highlight) against that same tree revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Positional id, `"query-<index>"`. Unique within one snapshot, but
    /// regenerated from scratch on every pass.
    pub id: String,
    /// Trimmed display text, truncated per [`crate::display_text`].
    pub text: String,
    /// Originating document node.
    pub node: NodeId,
}

/// Formats the positional entry id for `index`.
pub fn entry_id(index: usize) -> String {
    format!("query-{index}")
}

/// The full ordered list of entries published at a point in time.
///
/// Entries appear in document order and their ids match their position.
/// Snapshots are produced wholesale by each extraction pass; entries are
/// never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    entries: Vec<Entry>,
}

impl Snapshot {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }
}

/// Lifecycle of a mutation watcher.
///
/// `Inactive → Watching` on successful root location, `Watching → Inactive`
/// on teardown. Notification handling only happens in `Watching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchPhase {
    /// No root located, or torn down; no subscription is held.
    #[default]
    Inactive,
    /// Subscribed to change batches under a located root.
    Watching,
}

impl WatchPhase {
    pub fn is_watching(self) -> bool {
        self == WatchPhase::Watching
    }
}

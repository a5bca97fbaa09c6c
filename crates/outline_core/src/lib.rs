//! Outline core: pure extraction data model and publish policy.
mod config;
mod entry;
mod phase;
mod publish;
mod text;

pub use config::OutlineConfig;
pub use entry::{entry_id, Entry, Snapshot};
pub use phase::WatchPhase;
pub use publish::{decide, PublishDecision};
pub use text::{display_text, ELLIPSIS, MAX_ENTRY_CHARS};

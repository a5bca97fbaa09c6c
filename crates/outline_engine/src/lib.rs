//! Outline engine: document access, extraction pipeline, and watcher.
mod cell;
mod dom;
mod enablement;
mod export;
mod extract;
mod strategy;
mod watcher;

pub use cell::SnapshotCell;
pub use dom::{DocumentGateway, LiveDocument, SubtreeSubscription};
pub use enablement::{EnablementRelay, EnablementStore};
pub use export::{
    build_transcript_markdown, export_filename, save_transcript_export, ExportError,
    ExportSummary, FALLBACK_TITLE,
};
pub use extract::UserMessageExtractor;
pub use strategy::{SelectorStrategy, FALLBACK_SELECTOR, PRIMARY_SELECTOR, USER_AUTHORED_ATTR};
pub use watcher::OutlineWatcher;

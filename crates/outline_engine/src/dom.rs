use std::cell::RefCell;
use std::rc::Rc;

use scraper::{Html, Selector};

/// Read-only access to the ambient document plus change-batch delivery.
///
/// The engine is constructed against this seam, so tests inject a scripted
/// document instead of a real host page.
pub trait DocumentGateway {
    /// Markup of the live document at this instant.
    fn markup(&self) -> String;

    /// Whether `selector` currently matches at least one element.
    fn locate_root(&self, selector: &str) -> bool {
        let Some(sel) = Selector::parse(selector).ok() else {
            return false;
        };
        Html::parse_document(&self.markup())
            .select(&sel)
            .next()
            .is_some()
    }

    /// Delivers one `on_batch` call per coalesced change batch under the
    /// subtree rooted at `root_selector`, until the returned guard is
    /// released or dropped.
    fn subscribe_subtree(
        &self,
        root_selector: &str,
        on_batch: Box<dyn FnMut()>,
    ) -> SubtreeSubscription;
}

/// RAII guard for an active subtree-change subscription.
///
/// The teardown runs exactly once: either through [`release`], or when the
/// guard drops. Releasing again is a no-op.
///
/// [`release`]: SubtreeSubscription::release
pub struct SubtreeSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl SubtreeSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for SubtreeSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// Single-threaded stand-in for the host's mutating document.
///
/// Handles are cheap clones sharing one underlying document. Each mutator
/// delivers exactly one notification batch, matching hosts that coalesce
/// low-level changes into one callback invocation.
#[derive(Clone)]
pub struct LiveDocument {
    inner: Rc<RefCell<DocumentInner>>,
}

struct DocumentInner {
    markup: String,
    listeners: Vec<Listener>,
    // Ids released while a batch is in flight; honored before the next batch.
    released: Vec<u64>,
    next_listener: u64,
    delivery_depth: u32,
}

struct Listener {
    id: u64,
    on_batch: Box<dyn FnMut()>,
}

impl LiveDocument {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(DocumentInner {
                markup: markup.into(),
                listeners: Vec::new(),
                released: Vec::new(),
                next_listener: 0,
                delivery_depth: 0,
            })),
        }
    }

    /// Replaces the whole markup and delivers one change batch.
    pub fn set_markup(&self, markup: impl Into<String>) {
        self.inner.borrow_mut().markup = markup.into();
        self.deliver_batch();
    }

    /// Edits the markup in place and delivers one change batch.
    pub fn edit(&self, apply: impl FnOnce(&mut String)) {
        apply(&mut self.inner.borrow_mut().markup);
        self.deliver_batch();
    }

    /// Number of currently subscribed listeners.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn deliver_batch(&self) {
        // Listeners are moved out for the duration of the batch so they can
        // re-enter the document (read markup, subscribe, release).
        let mut active = {
            let mut inner = self.inner.borrow_mut();
            inner.delivery_depth += 1;
            std::mem::take(&mut inner.listeners)
        };
        for listener in &mut active {
            (listener.on_batch)();
        }
        let mut inner = self.inner.borrow_mut();
        inner.delivery_depth -= 1;
        let added = std::mem::take(&mut inner.listeners);
        active.extend(added);
        if inner.delivery_depth == 0 {
            let released = std::mem::take(&mut inner.released);
            active.retain(|listener| !released.contains(&listener.id));
        } else {
            // A nested batch must leave the released set for the outermost
            // delivery to consume.
            let released = &inner.released;
            active.retain(|listener| !released.contains(&listener.id));
        }
        inner.listeners = active;
    }

    fn release_listener(inner: &Rc<RefCell<DocumentInner>>, id: u64) {
        let mut inner = inner.borrow_mut();
        if inner.delivery_depth > 0 {
            inner.released.push(id);
        } else {
            inner.listeners.retain(|listener| listener.id != id);
        }
    }
}

impl DocumentGateway for LiveDocument {
    fn markup(&self) -> String {
        self.inner.borrow().markup.clone()
    }

    fn subscribe_subtree(
        &self,
        _root_selector: &str,
        on_batch: Box<dyn FnMut()>,
    ) -> SubtreeSubscription {
        // Batches here are document-wide: the watch root's subtree is the
        // whole document at this granularity.
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.push(Listener { id, on_batch });
            id
        };
        let inner = Rc::clone(&self.inner);
        SubtreeSubscription::new(move || Self::release_listener(&inner, id))
    }
}

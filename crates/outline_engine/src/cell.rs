use std::cell::RefCell;
use std::rc::Rc;

use outline_core::Snapshot;

/// Owned holder of the currently published snapshot.
///
/// The mutation watcher is the sole writer; consumers read [`current`] or
/// [`subscribe`] for publishes. Listeners run outside the internal borrow,
/// so they may re-enter the cell.
///
/// [`current`]: SnapshotCell::current
/// [`subscribe`]: SnapshotCell::subscribe
#[derive(Clone)]
pub struct SnapshotCell {
    inner: Rc<RefCell<CellInner>>,
}

struct CellInner {
    current: Rc<Snapshot>,
    listeners: Vec<Box<dyn FnMut(&Rc<Snapshot>)>>,
}

impl SnapshotCell {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(CellInner {
                current: Rc::new(Snapshot::empty()),
                listeners: Vec::new(),
            })),
        }
    }

    /// Currently published snapshot.
    pub fn current(&self) -> Rc<Snapshot> {
        Rc::clone(&self.inner.borrow().current)
    }

    /// Registers `listener` to run after every publish, for the lifetime of
    /// the cell.
    pub fn subscribe(&self, listener: impl FnMut(&Rc<Snapshot>) + 'static) {
        self.inner.borrow_mut().listeners.push(Box::new(listener));
    }

    pub(crate) fn publish(&self, next: Rc<Snapshot>) {
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.current = Rc::clone(&next);
            std::mem::take(&mut inner.listeners)
        };
        for listener in &mut listeners {
            listener(&next);
        }
        let mut inner = self.inner.borrow_mut();
        let added = std::mem::take(&mut inner.listeners);
        listeners.extend(added);
        inner.listeners = listeners;
    }
}

impl Default for SnapshotCell {
    fn default() -> Self {
        Self::new()
    }
}

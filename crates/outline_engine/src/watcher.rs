use std::rc::Rc;

use outline_core::{decide, OutlineConfig, PublishDecision, Snapshot, WatchPhase};
use outline_logging::outline_debug;

use crate::cell::SnapshotCell;
use crate::dom::{DocumentGateway, SubtreeSubscription};
use crate::extract::UserMessageExtractor;

/// Watches the document and keeps the published outline current.
///
/// Owns the snapshot cell and is its sole writer. Dropping the watcher
/// releases the change subscription.
pub struct OutlineWatcher {
    gateway: Rc<dyn DocumentGateway>,
    extractor: Rc<UserMessageExtractor>,
    cell: SnapshotCell,
    subscription: Option<SubtreeSubscription>,
    phase: WatchPhase,
    config: OutlineConfig,
}

impl OutlineWatcher {
    /// Locates the watch root and starts observing. When the root selector
    /// matches nothing the watcher stays inert with an empty snapshot; no
    /// retry is scheduled.
    pub fn start(gateway: Rc<dyn DocumentGateway>, config: OutlineConfig) -> Self {
        let cell = SnapshotCell::new();
        let extractor = Rc::new(UserMessageExtractor::new());

        if !gateway.locate_root(&config.root_selector) {
            if config.debug_logging {
                outline_debug!(
                    "watch root {:?} not found, staying inactive",
                    config.root_selector
                );
            }
            return Self {
                gateway,
                extractor,
                cell,
                subscription: None,
                phase: WatchPhase::Inactive,
                config,
            };
        }

        // The first pass has no predecessor; publish it without consulting
        // the heuristic.
        let initial = extractor.extract(&gateway.markup());
        if config.debug_logging {
            outline_debug!(
                "pass {}: initial outline has {} entries",
                outline_logging::current_pass_seq(),
                initial.len()
            );
        }
        cell.publish(Rc::new(initial));

        let subscription = {
            let batch_gateway = Rc::clone(&gateway);
            let batch_extractor = Rc::clone(&extractor);
            let batch_cell = cell.clone();
            let debug_logging = config.debug_logging;
            gateway.subscribe_subtree(
                &config.root_selector,
                Box::new(move || {
                    run_batch_pass(&*batch_gateway, &batch_extractor, &batch_cell, debug_logging);
                }),
            )
        };

        Self {
            gateway,
            extractor,
            cell,
            subscription: Some(subscription),
            phase: WatchPhase::Watching,
            config,
        }
    }

    pub fn phase(&self) -> WatchPhase {
        self.phase
    }

    /// Currently published snapshot.
    pub fn entries(&self) -> Rc<Snapshot> {
        self.cell.current()
    }

    /// Registers `listener` to run after every publish.
    pub fn subscribe(&self, listener: impl FnMut(&Rc<Snapshot>) + 'static) {
        self.cell.subscribe(listener);
    }

    /// Runs one pass and publishes it unconditionally, outside the mutation
    /// cadence. Callable in either phase; does not retry root location.
    pub fn refresh(&self) {
        let fresh = self.extractor.extract(&self.gateway.markup());
        if self.config.debug_logging {
            outline_debug!(
                "pass {}: manual refresh published {} entries",
                outline_logging::current_pass_seq(),
                fresh.len()
            );
        }
        self.cell.publish(Rc::new(fresh));
    }

    /// Releases the change subscription. Safe to call repeatedly; `Drop`
    /// releases as well.
    pub fn stop(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.release();
        }
        self.phase = WatchPhase::Inactive;
    }
}

impl Drop for OutlineWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_batch_pass(
    gateway: &dyn DocumentGateway,
    extractor: &UserMessageExtractor,
    cell: &SnapshotCell,
    debug_logging: bool,
) {
    let fresh = extractor.extract(&gateway.markup());
    let previous = cell.current();
    match decide(&previous, &fresh) {
        PublishDecision::Replace => {
            if debug_logging {
                outline_debug!(
                    "pass {}: outline updated to {} entries",
                    outline_logging::current_pass_seq(),
                    fresh.len()
                );
            }
            cell.publish(Rc::new(fresh));
        }
        PublishDecision::Retain => {
            if debug_logging {
                outline_debug!(
                    "pass {}: outline unchanged, retaining published snapshot",
                    outline_logging::current_pass_seq()
                );
            }
        }
    }
}

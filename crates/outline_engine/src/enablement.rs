use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use outline_logging::{outline_error, outline_warn};
use serde::{Deserialize, Serialize};

use crate::export::write_atomic;

const FLAG_FILENAME: &str = ".outline_enabled.json";
// An absent flag means the surface is enabled.
const DEFAULT_ENABLED: bool = true;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedFlag {
    enabled: bool,
}

/// Persisted on/off flag for the outline surface.
///
/// The extraction engine never reads this flag; visibility gating is the
/// consumer's concern. Missing or unreadable state degrades to enabled.
pub struct EnablementStore {
    dir: PathBuf,
}

impl EnablementStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load(&self) -> bool {
        let path = self.dir.join(FLAG_FILENAME);
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return DEFAULT_ENABLED;
            }
            Err(err) => {
                outline_warn!("Failed to read enablement flag from {:?}: {}", path, err);
                return DEFAULT_ENABLED;
            }
        };

        match serde_json::from_str::<PersistedFlag>(&content) {
            Ok(state) => state.enabled,
            Err(err) => {
                outline_warn!("Failed to parse enablement flag from {:?}: {}", path, err);
                DEFAULT_ENABLED
            }
        }
    }

    pub fn save(&self, enabled: bool) {
        let state = PersistedFlag { enabled };
        let content = match serde_json::to_string_pretty(&state) {
            Ok(content) => content,
            Err(err) => {
                outline_error!("Failed to serialize enablement flag: {}", err);
                return;
            }
        };
        if let Err(err) = write_atomic(&self.dir, FLAG_FILENAME, &content) {
            outline_error!(
                "Failed to persist enablement flag to {:?}: {}",
                self.dir,
                err
            );
        }
    }
}

/// In-process fan-out of enablement toggles to interested contexts.
///
/// Stands in for the host's cross-context messaging. Listeners run outside
/// the internal borrow, so they may subscribe re-entrantly.
#[derive(Clone, Default)]
pub struct EnablementRelay {
    listeners: Rc<RefCell<Vec<Box<dyn FnMut(bool)>>>>,
}

impl EnablementRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(bool) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Notifies every subscriber of the new flag value.
    pub fn broadcast(&self, enabled: bool) {
        let mut listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        for listener in &mut listeners {
            listener(enabled);
        }
        let mut slot = self.listeners.borrow_mut();
        let added = std::mem::take(&mut *slot);
        listeners.extend(added);
        *slot = listeners;
    }
}

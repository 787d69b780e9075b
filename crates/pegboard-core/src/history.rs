//! Single-level undo history.
//!
//! Only the most recent mutation is kept. Entries carry a full snapshot of
//! the affected instance so reverting needs no recomputation. Swapping the
//! slot for a stack of the same entries gives multi-level undo.

use crate::placement::{InstanceId, PlacedInstance, PlacementStore};
use serde::{Deserialize, Serialize};

/// A recorded mutation of the placement store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEntry {
    /// An instance was placed.
    Add(PlacedInstance),
    /// An instance was removed.
    Remove(PlacedInstance),
}

impl HistoryEntry {
    /// The instance this entry refers to.
    pub fn instance(&self) -> &PlacedInstance {
        match self {
            HistoryEntry::Add(instance) | HistoryEntry::Remove(instance) => instance,
        }
    }
}

/// Holds the last mutating action for undo.
#[derive(Debug, Clone, Default)]
pub struct HistoryTracker {
    last: Option<HistoryEntry>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action, replacing any previous entry.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.last = Some(entry);
    }

    /// Revert the recorded action against `store`.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self, store: &mut PlacementStore) -> bool {
        let Some(entry) = self.last.take() else {
            return false;
        };
        match entry {
            HistoryEntry::Add(instance) => match store.remove(instance.id) {
                Ok(_) => {
                    log::debug!("Undo placement of {} ({})", instance.id, instance.type_id);
                    true
                }
                Err(e) => {
                    log::warn!("Undo skipped: {}", e);
                    false
                }
            },
            HistoryEntry::Remove(instance) => {
                let id = instance.id;
                let restored = store.restore(instance);
                if restored {
                    log::debug!("Undo removal of {}", id);
                } else {
                    log::warn!("Undo skipped: instance {} already present", id);
                }
                restored
            }
        }
    }

    /// Discard the entry without reverting it.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Discard the entry if it refers to `id`. Returns true if one was dropped.
    pub fn forget(&mut self, id: InstanceId) -> bool {
        if self.last.as_ref().is_some_and(|e| e.instance().id == id) {
            self.last = None;
            true
        } else {
            false
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.last.is_some()
    }

    /// The recorded entry, if any.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.last.as_ref()
    }
}

//! In-memory snapshot slot - used when no snapshot directory is configured.

use std::collections::HashMap;

use parking_lot::RwLock;

use board_core::ports::{SlotError, SnapshotSlot};

/// In-memory slot using a simple HashMap behind a RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemorySlot {
    store: RwLock<HashMap<String, String>>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }
}

impl Default for InMemorySlot {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSlot for InMemorySlot {
    fn load(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.store.read().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SlotError> {
        self.store.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        self.store.write().remove(key);
        Ok(())
    }
}

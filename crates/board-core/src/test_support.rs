//! Slot doubles for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::{SlotError, SnapshotSlot};

/// Slot backed by a plain map, recording how many writes it received.
#[derive(Default)]
pub struct MapSlot {
    values: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl MapSlot {
    pub fn with_value(key: &str, value: &str) -> Self {
        let slot = Self::default();
        slot.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        slot
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl SnapshotSlot for MapSlot {
    fn load(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SlotError> {
        *self.writes.lock().unwrap() += 1;
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Slot that fails every operation.
pub struct BrokenSlot;

impl SnapshotSlot for BrokenSlot {
    fn load(&self, _key: &str) -> Result<Option<String>, SlotError> {
        Err(SlotError::Unavailable("broken".into()))
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), SlotError> {
        Err(SlotError::Unavailable("broken".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), SlotError> {
        Err(SlotError::Unavailable("broken".into()))
    }
}

//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod slot;

pub use slot::{SlotError, SnapshotSlot};

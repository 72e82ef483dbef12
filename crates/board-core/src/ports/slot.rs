/// Snapshot slot - abstraction over durable key-value storage (disk, in-memory).
///
/// Values are opaque strings; the store decides what goes in them.
pub trait SnapshotSlot: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing was written yet.
    fn load(&self, key: &str) -> Result<Option<String>, SlotError>;

    /// Overwrite the value stored under `key`.
    fn save(&self, key: &str, value: &str) -> Result<(), SlotError>;

    /// Remove the value stored under `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), SlotError>;
}

/// Slot operation errors.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("I/O failed: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Slot unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for SlotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

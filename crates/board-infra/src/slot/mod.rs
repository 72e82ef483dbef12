//! Snapshot slot implementations - on-disk and in-memory.

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::InMemorySlot;

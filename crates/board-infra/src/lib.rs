//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//!
//! - [`InMemorySlot`] - process-local map, nothing survives a restart
//! - [`FileSlot`] - one JSON file per key in a directory

pub mod slot;

pub use slot::{FileSlot, InMemorySlot};

#[cfg(test)]
mod tests;

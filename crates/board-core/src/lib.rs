//! # Board Core
//!
//! The domain layer of Board: posts, categories, the write-through post store
//! and the read-side views computed from it.
//! Persistence is reached only through the [`ports::SnapshotSlot`] trait.

pub mod bootstrap;
pub mod domain;
pub mod error;
pub mod ports;
pub mod seed;
pub mod store;
pub mod views;

#[cfg(test)]
mod test_support;

pub use error::DomainError;
pub use store::{PostStore, StoreChange, StoreEvent};

//! Application state - the context object handed to the presentation layer.

use std::sync::Arc;

use board_core::PostStore;
use board_core::bootstrap;
use board_core::ports::SnapshotSlot;
use board_infra::{FileSlot, InMemorySlot};

use crate::config::AppConfig;

/// Everything the presentation layer reads from and writes to.
pub struct AppState {
    pub config: AppConfig,
    pub store: PostStore,
}

impl AppState {
    /// Build the slot and restore the store from it, without seeding.
    pub fn open(config: AppConfig) -> Self {
        let store = PostStore::open(Self::slot(&config), config.snapshot_key.clone());
        Self { config, store }
    }

    /// Seed the store if seeding is enabled and nothing was restored.
    pub fn bootstrap(&mut self) -> bool {
        let seeded = self.config.seed_on_start && bootstrap::initialize_data(&mut self.store);

        tracing::info!(
            seeded,
            posts = self.store.active_posts().len(),
            categories = self.store.categories().len(),
            "Application state initialized"
        );
        seeded
    }

    fn slot(config: &AppConfig) -> Arc<dyn SnapshotSlot> {
        match &config.snapshot_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "Using on-disk snapshots");
                Arc::new(FileSlot::new(dir.clone()))
            }
            None => {
                tracing::warn!("SNAPSHOT_DIR not set. Running without persistence (in-memory mode).");
                Arc::new(InMemorySlot::new())
            }
        }
    }
}

//! One-time population of an empty store with seed data.

use crate::seed;
use crate::store::PostStore;

/// Seed `store` unless it already holds posts. Returns `true` if it seeded.
pub fn initialize_data(store: &mut PostStore) -> bool {
    if !store.posts().is_empty() {
        tracing::debug!(posts = store.posts().len(), "Store already populated");
        return false;
    }

    tracing::info!("Initializing sample data...");
    store.set_categories(seed::sample_categories());
    store.set_posts(seed::sample_posts());
    tracing::info!(
        posts = store.posts().len(),
        categories = store.categories().len(),
        "Sample data initialized"
    );
    true
}

/// Drop everything and seed again. Meant for demos and tests.
pub fn reset_data(store: &mut PostStore) {
    store.set_posts(Vec::new());
    store.set_categories(Vec::new());
    initialize_data(store);
}

//! # Board App
//!
//! Startup sequence for the board: configuration, telemetry, snapshot restore,
//! bootstrap, and a change logger subscribed to the store.

use anyhow::Context;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use board_core::StoreEvent;

mod config;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    if let Some(dir) = &config.snapshot_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating snapshot directory {}", dir.display()))?;
    }

    tracing::info!(
        key = %config.snapshot_key,
        seed_on_start = config.seed_on_start,
        "Starting board"
    );

    let mut state = AppState::open(config);
    let changes = spawn_change_logger(state.store.subscribe());
    state.bootstrap();

    log_overview(&state);

    // Dropping the store closes the channel and lets the logger finish.
    drop(state);
    let seen = changes.await.context("change logger panicked")?;
    tracing::info!(changes = seen, "Board stopped");

    Ok(())
}

/// Log every store change until the store goes away. Returns how many were seen.
fn spawn_change_logger(mut events: broadcast::Receiver<StoreEvent>) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut seen = 0;
        loop {
            match events.recv().await {
                Ok(event) => {
                    seen += 1;
                    tracing::debug!(version = event.version, change = ?event.change, "Store changed");
                }
                Err(broadcast::error::RecvError::Lagged(count)) => {
                    tracing::warn!(lagged = count, "Change logger lagged behind");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        seen
    })
}

fn log_overview(state: &AppState) {
    let store = &state.store;

    for category in store.categories_with_count() {
        tracing::info!(
            id = %category.category.id,
            name = %category.category.name,
            posts = category.post_count,
            "Category"
        );
    }

    for post in store.recent_posts(state.config.recent_limit) {
        let category = post
            .category
            .as_deref()
            .map(|c| store.category_name(c))
            .unwrap_or("-");
        tracing::info!(
            id = %post.id,
            title = %post.title,
            category = %category,
            created_at = %post.created_at,
            "Recent post"
        );
    }

    tracing::info!(
        tags = ?store.popular_tags(state.config.popular_tag_limit),
        "Popular tags"
    );
}

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use board_core::store::DEFAULT_SNAPSHOT_KEY;
use board_core::views::{DEFAULT_POPULAR_TAG_LIMIT, DEFAULT_RECENT_LIMIT};

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory for on-disk snapshots; in-memory only when unset.
    pub snapshot_dir: Option<PathBuf>,
    pub snapshot_key: String,
    /// Seed sample data into an empty store at startup.
    pub seed_on_start: bool,
    pub recent_limit: usize,
    pub popular_tag_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: None,
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
            seed_on_start: true,
            recent_limit: DEFAULT_RECENT_LIMIT,
            popular_tag_limit: DEFAULT_POPULAR_TAG_LIMIT,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            snapshot_dir: lookup("SNAPSHOT_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            snapshot_key: lookup("SNAPSHOT_KEY")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.snapshot_key),
            seed_on_start: lookup("SEED_ON_START")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.seed_on_start),
            recent_limit: lookup("RECENT_LIMIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.recent_limit),
            popular_tag_limit: lookup("POPULAR_TAG_LIMIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.popular_tag_limit),
        }
    }
}

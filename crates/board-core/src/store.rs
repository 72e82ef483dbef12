//! The post store - sole owner of posts, categories and UI status flags.
//!
//! Every mutation bumps the store version, publishes a [`StoreEvent`] and
//! writes a [`Snapshot`] through to the configured [`SnapshotSlot`].
//! Slot failures are logged and swallowed; no mutation can fail.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::domain::{Category, CategoryWithCount, Post, PostDraft, PostPatch, Snapshot};
use crate::error::DomainError;
use crate::ports::SnapshotSlot;
use crate::views;

/// Slot key the snapshot is stored under unless configured otherwise.
pub const DEFAULT_SNAPSHOT_KEY: &str = "post-store";

const EVENT_BUFFER: usize = 64;

/// What a mutation changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    PostsReplaced,
    PostAdded(String),
    PostUpdated(String),
    PostDeleted(String),
    CategoriesReplaced,
    LoadingChanged(bool),
    ErrorChanged,
    Restored,
}

/// Notification sent to subscribers after each change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    pub version: u64,
    pub change: StoreChange,
}

/// Authoritative in-memory post and category collections.
pub struct PostStore {
    posts: Vec<Post>,
    categories: Vec<Category>,
    is_loading: bool,
    error: Option<String>,
    version: u64,
    slot: Arc<dyn SnapshotSlot>,
    key: String,
    events: broadcast::Sender<StoreEvent>,
}

impl PostStore {
    /// Create an empty store writing through to `slot` under `key`.
    pub fn new(slot: Arc<dyn SnapshotSlot>, key: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            posts: Vec::new(),
            categories: Vec::new(),
            is_loading: false,
            error: None,
            version: 0,
            slot,
            key: key.into(),
            events,
        }
    }

    /// Create a store and rehydrate it from whatever the slot holds.
    pub fn open(slot: Arc<dyn SnapshotSlot>, key: impl Into<String>) -> Self {
        let mut store = Self::new(slot, key);
        store.restore();
        store
    }

    /// Replace posts and categories with the stored snapshot.
    ///
    /// Returns `true` if a snapshot was found and applied. Nothing is written back.
    pub fn restore(&mut self) -> bool {
        let raw = match self.slot.load(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No snapshot to restore");
                return false;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Snapshot slot unavailable");
                return false;
            }
        };

        match Snapshot::from_json(&raw) {
            Ok(snapshot) => {
                self.posts = snapshot.posts;
                self.categories = snapshot.categories;
                tracing::info!(
                    key = %self.key,
                    posts = self.posts.len(),
                    categories = self.categories.len(),
                    "Store restored from snapshot"
                );
                self.notify(StoreChange::Restored);
                true
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Ignoring unreadable snapshot");
                false
            }
        }
    }

    // Reads

    /// Every post, soft-deleted ones included, in store order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of changes applied since the store was created.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The persisted part of the state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            posts: self.posts.clone(),
            categories: self.categories.clone(),
        }
    }

    /// Receive an event for every subsequent change.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    // Mutations

    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.commit(StoreChange::PostsReplaced);
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.commit(StoreChange::CategoriesReplaced);
    }

    /// Insert `post` at the front of the collection.
    ///
    /// The caller is responsible for required fields; see [`PostDraft::validate`].
    pub fn add_post(&mut self, post: Post) {
        let id = post.id.clone();
        self.posts.insert(0, post);
        self.error = None;
        tracing::debug!(post_id = %id, "Post added");
        self.commit(StoreChange::PostAdded(id));
    }

    /// Merge `patch` into the post with `id`. Returns `false` (and changes
    /// nothing) when no such post exists.
    pub fn update_post(&mut self, id: &str, patch: PostPatch) -> bool {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(post_id = %id, "Update skipped, post not found");
            return false;
        };

        post.apply(patch);
        self.error = None;
        tracing::debug!(post_id = %id, "Post updated");
        self.commit(StoreChange::PostUpdated(id.to_string()));
        true
    }

    /// Soft-delete the post with `id`. Returns `false` when no such post exists.
    pub fn delete_post(&mut self, id: &str) -> bool {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(post_id = %id, "Delete skipped, post not found");
            return false;
        };

        post.is_deleted = true;
        post.touch();
        self.error = None;
        tracing::debug!(post_id = %id, "Post soft-deleted");
        self.commit(StoreChange::PostDeleted(id.to_string()));
        true
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.commit(StoreChange::LoadingChanged(loading));
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
        self.commit(StoreChange::ErrorChanged);
    }

    /// Validate a submitted form and add the resulting post. Returns its id.
    pub fn create_post(&mut self, draft: PostDraft) -> Result<String, DomainError> {
        let post = draft.into_post()?;
        let id = post.id.clone();
        self.add_post(post);
        Ok(id)
    }

    /// Validate an edit form and apply it to an active post.
    pub fn edit_post(&mut self, id: &str, draft: PostDraft) -> Result<(), DomainError> {
        if self.post_by_id(id).is_none() {
            return Err(DomainError::NotFound {
                entity_type: "post",
                id: id.to_string(),
            });
        }
        let patch = draft.into_patch()?;
        self.update_post(id, patch);
        Ok(())
    }

    // Views

    pub fn active_posts(&self) -> Vec<&Post> {
        views::active_posts(&self.posts)
    }

    pub fn post_by_id(&self, id: &str) -> Option<&Post> {
        views::post_by_id(&self.posts, id)
    }

    pub fn posts_by_category(&self, category_id: &str) -> Vec<&Post> {
        views::posts_by_category(&self.posts, category_id)
    }

    pub fn posts_by_tag(&self, tag: &str) -> Vec<&Post> {
        views::posts_by_tag(&self.posts, tag)
    }

    pub fn recent_posts(&self, limit: usize) -> Vec<&Post> {
        views::recent_posts(&self.posts, limit)
    }

    pub fn popular_tags(&self, limit: usize) -> Vec<String> {
        views::popular_tags(&self.posts, limit)
    }

    pub fn categories_with_count(&self) -> Vec<CategoryWithCount> {
        views::categories_with_count(&self.categories, &self.posts)
    }

    pub fn category_name<'a>(&'a self, id: &'a str) -> &'a str {
        views::category_name(&self.categories, id)
    }

    pub fn search(&self, query: &str) -> Vec<&Post> {
        views::search(&self.posts, query)
    }

    fn commit(&mut self, change: StoreChange) {
        self.notify(change);
        self.persist();
    }

    fn notify(&mut self, change: StoreChange) {
        self.version += 1;
        // No receivers is fine
        let _ = self.events.send(StoreEvent {
            version: self.version,
            change,
        });
    }

    fn persist(&self) {
        let raw = match self.snapshot().to_json() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to serialize snapshot");
                return;
            }
        };

        match self.slot.save(&self.key, &raw) {
            Ok(()) => tracing::debug!(key = %self.key, bytes = raw.len(), "Snapshot written"),
            Err(e) => tracing::warn!(key = %self.key, error = %e, "Failed to write snapshot"),
        }
    }
}

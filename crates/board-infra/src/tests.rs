#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use board_core::bootstrap;
    use board_core::domain::{PostDraft, PostPatch};
    use board_core::ports::SnapshotSlot;
    use board_core::store::{DEFAULT_SNAPSHOT_KEY, PostStore};

    use crate::{FileSlot, InMemorySlot};

    #[test]
    fn test_store_survives_restart_on_disk() {
        let dir = tempfile::tempdir().unwrap();

        let saved = {
            let slot: Arc<dyn SnapshotSlot> = Arc::new(FileSlot::new(dir.path()));
            let mut store = PostStore::open(slot, DEFAULT_SNAPSHOT_KEY);
            bootstrap::initialize_data(&mut store);
            let id = store
                .create_post(PostDraft::new("Fresh", "Written before restart", "Ann"))
                .unwrap();
            store.update_post("1", PostPatch::new().title("Renamed"));
            store.delete_post("2");
            assert!(store.post_by_id(&id).is_some());
            store.snapshot()
        };

        let slot: Arc<dyn SnapshotSlot> = Arc::new(FileSlot::new(dir.path()));
        let mut store = PostStore::open(slot, DEFAULT_SNAPSHOT_KEY);

        assert_eq!(store.snapshot(), saved);
        assert!(!bootstrap::initialize_data(&mut store));
        assert_eq!(store.post_by_id("1").unwrap().title, "Renamed");
        assert!(store.post_by_id("2").is_none());
        assert_eq!(store.active_posts().len(), 3);
    }

    #[test]
    fn test_in_memory_slot_shares_between_stores() {
        let slot = Arc::new(InMemorySlot::new());

        let mut first = PostStore::new(slot.clone(), DEFAULT_SNAPSHOT_KEY);
        bootstrap::initialize_data(&mut first);

        let second = PostStore::open(slot.clone(), DEFAULT_SNAPSHOT_KEY);
        assert_eq!(second.categories_with_count().len(), 3);
        assert_eq!(second.popular_tags(1), vec!["react".to_string()]);
        assert_eq!(slot.len(), 1);
    }

    #[test]
    fn test_snapshot_file_is_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let slot = Arc::new(FileSlot::new(dir.path()));
        let mut store = PostStore::new(slot.clone(), "board");
        bootstrap::initialize_data(&mut store);

        let raw = std::fs::read_to_string(dir.path().join("board.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["posts"][0]["id"], "1");
        assert_eq!(value["categories"][0]["slug"], "development");
        assert!(value["posts"][0].get("isDeleted").is_some());
    }
}

//! File-backed snapshot slot - the local persistence used across restarts.
//!
//! Each key maps to `<dir>/<key>.json`. Writes land in a sibling temp file
//! first and are renamed over the target, so a crash mid-write leaves the
//! previous snapshot intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use board_core::ports::{SlotError, SnapshotSlot};

/// Directory of JSON files, one per key.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Slot rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SlotError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(SlotError::Unavailable(format!("invalid slot key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SnapshotSlot for FileSlot {
    fn load(&self, key: &str) -> Result<Option<String>, SlotError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SlotError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "Slot file written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path());
        assert_eq!(slot.load("post-store").unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested"));

        slot.save("post-store", "{\"posts\":[]}").unwrap();

        assert_eq!(
            slot.load("post-store").unwrap(),
            Some("{\"posts\":[]}".to_string())
        );
        assert!(dir.path().join("nested/post-store.json").exists());
        assert!(!dir.path().join("nested/post-store.json.tmp").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path());
        slot.save("post-store", "x").unwrap();

        slot.remove("post-store").unwrap();
        slot.remove("post-store").unwrap();

        assert_eq!(slot.load("post-store").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path());
        assert!(slot.save("../escape", "x").is_err());
        assert!(slot.load("").is_err());
    }
}

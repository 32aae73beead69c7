//! Snapshot files on disk.
//!
//! Thin persistence layer over the JSON snapshot: pretty-printed file
//! per profile, loaded back as `Option` — a missing file and an
//! unreadable one both mean "no profile", only I/O trouble is an error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ProfileResult;
use crate::profile::RdpProfile;

pub struct ProfileStore {
    store_path: PathBuf,
}

impl ProfileStore {
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self { store_path: store_path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    pub fn exists(&self) -> bool {
        self.store_path.exists()
    }

    pub fn save(&self, profile: &RdpProfile) -> ProfileResult<()> {
        fs::write(&self.store_path, profile.to_json())?;
        log::debug!("profile {} saved to {}", profile.id(), self.store_path.display());
        Ok(())
    }

    /// Load the stored profile, if any. An unparseable file is treated
    /// as absent (and logged by the snapshot layer) rather than
    /// surfacing a half-built profile.
    pub fn load(&self) -> ProfileResult<Option<RdpProfile>> {
        if !self.store_path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.store_path)?;
        Ok(RdpProfile::from_json(&json))
    }

    pub fn clear(&self) -> ProfileResult<()> {
        if self.store_path.exists() {
            fs::remove_file(&self.store_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, ProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let (_dir, store) = store();
        assert!(!store.exists());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_dir, store) = store();
        let mut profile = RdpProfile::new();
        profile.set_address("10.0.0.2");
        profile.set_name("staging");

        store.save(&profile).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.id(), profile.id());
        assert_eq!(loaded.address(), "10.0.0.2");
        assert_eq!(loaded.name(), "staging");
    }

    #[test]
    fn test_corrupt_file_loads_as_none() {
        let (_dir, store) = store();
        fs::write(store.path(), "{ this is not a profile").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_removes_file() {
        let (_dir, store) = store();
        store.save(&RdpProfile::new()).unwrap();
        assert!(store.exists());
        store.clear().unwrap();
        assert!(!store.exists());
        // Clearing an already-empty store is fine.
        store.clear().unwrap();
    }
}

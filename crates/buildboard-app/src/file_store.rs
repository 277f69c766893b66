// Rust guideline compliant 2026-10-18

//! JSONL-backed document store and data directory layout.

use crate::error::Result;
use crate::local::{Collection, LocalStore};
use buildboard_core::{Build, Config, Document, Resource, Storage, UserPreferences};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File holding builds.
pub const BUILDS_FILE: &str = "builds.jsonl";

/// File holding custom resources.
pub const RESOURCES_FILE: &str = "resources.jsonl";

/// File holding user preferences.
pub const PREFERENCES_FILE: &str = "preferences.jsonl";

impl<T> Collection<T> for Storage<T>
where
    T: Document + Serialize + DeserializeOwned + Clone + Send + Sync,
{
    fn load_all(&self) -> buildboard_core::Result<Vec<T>> {
        Storage::load_all(self)
    }

    fn upsert(&self, document: &T) -> buildboard_core::Result<()> {
        self.save(document)
    }

    fn remove(&self, id: &str) -> buildboard_core::Result<()> {
        self.delete(id)
    }
}

/// Path metadata for a buildboard data directory.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Opens a data directory, creating it if needed.
    ///
    /// # Arguments
    ///
    /// * `root` - Directory holding the JSONL files and `config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(root: &Path) -> Result<Self> {
        std::fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Returns the directory path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the builds JSONL path.
    #[must_use]
    pub fn builds_path(&self) -> PathBuf {
        self.root.join(BUILDS_FILE)
    }

    /// Returns the resources JSONL path.
    #[must_use]
    pub fn resources_path(&self) -> PathBuf {
        self.root.join(RESOURCES_FILE)
    }

    /// Returns the preferences JSONL path.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.root.join(PREFERENCES_FILE)
    }

    /// Loads the configuration of this directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.root())?)
    }

    /// Opens a document store over the directory's JSONL files.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage cannot be initialized.
    pub fn open_store(&self) -> Result<LocalStore> {
        let builds: Storage<Build> = Storage::new(self.builds_path())?;
        let resources: Storage<Resource> = Storage::new(self.resources_path())?;
        let preferences: Storage<UserPreferences> = Storage::new(self.preferences_path())?;
        Ok(LocalStore::new(
            Box::new(builds),
            Box::new(resources),
            Box::new(preferences),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DocumentStore;
    use buildboard_core::{BuildDraft, BuildStatus, GameVersion};
    use tempfile::TempDir;

    #[test]
    fn test_store_persists_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDir::open(&temp_dir.path().join("board")).unwrap();

        let draft = BuildDraft {
            build_name: "Spark Stormweaver".to_string(),
            game_version: Some(GameVersion::Poe2),
            build_status: Some(BuildStatus::Active),
            ..BuildDraft::default()
        };
        let created = data_dir.open_store().unwrap().add_build("u1", draft).unwrap();
        assert!(data_dir.builds_path().exists());

        let reopened = data_dir.open_store().unwrap();
        assert_eq!(reopened.user_builds("u1").unwrap(), vec![created]);
        assert!(reopened.user_builds("u2").unwrap().is_empty());
        assert!(reopened.preferences("u1").unwrap().hidden_resource_ids.is_empty());
    }
}

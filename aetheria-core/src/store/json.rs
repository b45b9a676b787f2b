//! File-backed content store: one JSON file per collection.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::debug;

use super::ContentStore;
use crate::error::StoreError;
use crate::types::{KnowledgeCrystal, Quest, Realm, Submission, UserProfile};

const REALMS_FILE: &str = "realms.json";
const QUESTS_FILE: &str = "quests.json";
const SUBMISSIONS_FILE: &str = "submissions.json";
const CRYSTALS_FILE: &str = "crystals.json";
const PROFILE_FILE: &str = "profile.json";

/// File-backed implementation of [`ContentStore`].
///
/// Every collection lives in a pretty-printed JSON file under the data
/// directory and is read on demand and replaced wholesale on write. There is
/// no cache: the file is the source of truth, under the single-writer
/// assumption the rest of the system makes.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open a store rooted at `dir`. The directory is created on first write.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_collection<T: DeserializeOwned + Default>(
        &self,
        file: &str,
    ) -> Result<T, StoreError> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn write_collection<T: Serialize + ?Sized>(
        &self,
        file: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(file);
        let content = serde_json::to_string_pretty(value)?;
        fs::write(&path, content).await?;
        debug!(path = %path.display(), "collection written");
        Ok(())
    }
}

#[async_trait]
impl ContentStore for JsonStore {
    async fn realms(&self) -> Result<Vec<Realm>, StoreError> {
        self.read_collection(REALMS_FILE).await
    }

    async fn put_realms(&self, realms: &[Realm]) -> Result<(), StoreError> {
        self.write_collection(REALMS_FILE, realms).await
    }

    async fn quests(&self) -> Result<Vec<Quest>, StoreError> {
        self.read_collection(QUESTS_FILE).await
    }

    async fn put_quests(&self, quests: &[Quest]) -> Result<(), StoreError> {
        self.write_collection(QUESTS_FILE, quests).await
    }

    async fn submissions(&self) -> Result<Vec<Submission>, StoreError> {
        self.read_collection(SUBMISSIONS_FILE).await
    }

    async fn put_submissions(&self, submissions: &[Submission]) -> Result<(), StoreError> {
        self.write_collection(SUBMISSIONS_FILE, submissions).await
    }

    async fn crystals(&self) -> Result<Vec<KnowledgeCrystal>, StoreError> {
        self.read_collection(CRYSTALS_FILE).await
    }

    async fn put_crystals(&self, crystals: &[KnowledgeCrystal]) -> Result<(), StoreError> {
        self.write_collection(CRYSTALS_FILE, crystals).await
    }

    async fn profile(&self) -> Result<Option<UserProfile>, StoreError> {
        self.read_collection(PROFILE_FILE).await
    }

    async fn put_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.write_collection(PROFILE_FILE, profile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{QuestType, Role};
    use tempfile::tempdir;
    use uuid::Uuid;

    #[tokio::test]
    async fn missing_files_read_as_empty() {
        let temp_dir = tempdir().unwrap();
        let store = JsonStore::open(temp_dir.path());

        assert!(store.quests().await.unwrap().is_empty());
        assert!(store.profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn collections_persist_across_reopen() {
        let temp_dir = tempdir().unwrap();
        let quest = Quest::new(Uuid::new_v4(), "Q", "d", QuestType::Boss, 300);

        {
            let store = JsonStore::open(temp_dir.path());
            store.put_quests(std::slice::from_ref(&quest)).await.unwrap();
        }

        {
            let store = JsonStore::open(temp_dir.path());
            let quests = store.quests().await.unwrap();
            assert_eq!(quests, vec![quest]);
        }
    }

    #[tokio::test]
    async fn profile_round_trips() {
        let temp_dir = tempdir().unwrap();
        let store = JsonStore::open(temp_dir.path());

        let profile = UserProfile::new("user-1", "Ada", Role::Student);
        store.put_profile(&profile).await.unwrap();

        assert_eq!(store.profile().await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn put_replaces_the_file_wholesale() {
        let temp_dir = tempdir().unwrap();
        let store = JsonStore::open(temp_dir.path());

        let a = Quest::new(Uuid::new_v4(), "A", "d", QuestType::Standard, 10);
        let b = Quest::new(Uuid::new_v4(), "B", "d", QuestType::Standard, 20);
        store.put_quests(&[a, b]).await.unwrap();

        let c = Quest::new(Uuid::new_v4(), "C", "d", QuestType::Standard, 30);
        store.put_quests(std::slice::from_ref(&c)).await.unwrap();

        assert_eq!(store.quests().await.unwrap(), vec![c]);
    }

    #[tokio::test]
    async fn corrupt_file_surfaces_serialization_error() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("quests.json"), "not json").unwrap();

        let store = JsonStore::open(temp_dir.path());
        let err = store.quests().await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}

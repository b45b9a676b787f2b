//! In-memory content store for tests and ephemeral sessions.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ContentStore;
use crate::error::StoreError;
use crate::types::{KnowledgeCrystal, Quest, Realm, Submission, UserProfile};

#[derive(Default)]
struct Collections {
    realms: Vec<Realm>,
    quests: Vec<Quest>,
    submissions: Vec<Submission>,
    crystals: Vec<KnowledgeCrystal>,
    profile: Option<UserProfile>,
}

/// In-memory implementation of [`ContentStore`].
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn realms(&self) -> Result<Vec<Realm>, StoreError> {
        Ok(self.collections.read().await.realms.clone())
    }

    async fn put_realms(&self, realms: &[Realm]) -> Result<(), StoreError> {
        self.collections.write().await.realms = realms.to_vec();
        Ok(())
    }

    async fn quests(&self) -> Result<Vec<Quest>, StoreError> {
        Ok(self.collections.read().await.quests.clone())
    }

    async fn put_quests(&self, quests: &[Quest]) -> Result<(), StoreError> {
        self.collections.write().await.quests = quests.to_vec();
        Ok(())
    }

    async fn submissions(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(self.collections.read().await.submissions.clone())
    }

    async fn put_submissions(&self, submissions: &[Submission]) -> Result<(), StoreError> {
        self.collections.write().await.submissions = submissions.to_vec();
        Ok(())
    }

    async fn crystals(&self) -> Result<Vec<KnowledgeCrystal>, StoreError> {
        Ok(self.collections.read().await.crystals.clone())
    }

    async fn put_crystals(&self, crystals: &[KnowledgeCrystal]) -> Result<(), StoreError> {
        self.collections.write().await.crystals = crystals.to_vec();
        Ok(())
    }

    async fn profile(&self) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.collections.read().await.profile.clone())
    }

    async fn put_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.collections.write().await.profile = Some(profile.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestType;
    use uuid::Uuid;

    #[tokio::test]
    async fn empty_store_returns_empty_collections() {
        let store = MemoryStore::new();
        assert!(store.realms().await.unwrap().is_empty());
        assert!(store.quests().await.unwrap().is_empty());
        assert!(store.profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_replaces_the_whole_collection() {
        let store = MemoryStore::new();
        let quest_a = Quest::new(Uuid::new_v4(), "A", "d", QuestType::Standard, 10);
        let quest_b = Quest::new(Uuid::new_v4(), "B", "d", QuestType::Standard, 20);

        store.put_quests(&[quest_a.clone(), quest_b]).await.unwrap();
        assert_eq!(store.quests().await.unwrap().len(), 2);

        store.put_quests(&[quest_a]).await.unwrap();
        assert_eq!(store.quests().await.unwrap().len(), 1);
    }
}

//! Content store: key-value persistence for realms, quests, submissions,
//! crystals, and the profile.
//!
//! Collections are read and replaced wholesale under the single-writer
//! assumption: every operation loads the full list, produces a new one, and
//! writes it back. The trait keeps the progression controller testable
//! without touching the filesystem.

mod json;
mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{KnowledgeCrystal, Quest, Realm, Submission, UserProfile};

pub use json::JsonStore;
pub use memory::MemoryStore;

/// Storage operations for the aetheria content collections.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All realms.
    async fn realms(&self) -> Result<Vec<Realm>, StoreError>;

    /// Replace the realm collection.
    async fn put_realms(&self, realms: &[Realm]) -> Result<(), StoreError>;

    /// All quests.
    async fn quests(&self) -> Result<Vec<Quest>, StoreError>;

    /// Replace the quest collection.
    async fn put_quests(&self, quests: &[Quest]) -> Result<(), StoreError>;

    /// All submissions.
    async fn submissions(&self) -> Result<Vec<Submission>, StoreError>;

    /// Replace the submission collection.
    async fn put_submissions(&self, submissions: &[Submission]) -> Result<(), StoreError>;

    /// All knowledge crystals.
    async fn crystals(&self) -> Result<Vec<KnowledgeCrystal>, StoreError>;

    /// Replace the crystal collection.
    async fn put_crystals(&self, crystals: &[KnowledgeCrystal]) -> Result<(), StoreError>;

    /// The active profile, if one exists.
    async fn profile(&self) -> Result<Option<UserProfile>, StoreError>;

    /// Replace the active profile.
    async fn put_profile(&self, profile: &UserProfile) -> Result<(), StoreError>;
}

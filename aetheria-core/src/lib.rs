//! aetheria-core: Core library for the Aetheria quest progression engine
//!
//! This crate provides the foundational components for Aetheria:
//!
//! - **Domain types** - [`Realm`], [`Quest`], [`Submission`], [`KnowledgeCrystal`],
//!   [`Artifact`], and [`UserProfile`]
//! - **Leveling engine** - [`leveling`] for the pure XP-to-level/title mapping
//! - **Evaluation oracle** - [`EvaluationOracle`] trait with [`OllamaOracle`]
//!   (local model over HTTP) and a scriptable [`MockOracle`] for tests
//! - **Content store** - [`ContentStore`] trait with [`MemoryStore`] and the
//!   file-backed [`JsonStore`]
//! - **Progression** - [`ProgressionController`] running the full submission
//!   workflow: evaluation, XP award, artifacts, and the redemption path
//! - **Transfer** - [`ExportPackage`] for moving curriculum between installs
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use aetheria_core::{
//!     ContentStore, MemoryStore, MockOracle, ProgressionController, Quest, QuestType, Theme,
//! };
//! use uuid::Uuid;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::new());
//! let oracle = Arc::new(MockOracle::new());
//! oracle.queue_score(92, "Excellent reasoning throughout.");
//!
//! let quest = Quest::new(Uuid::new_v4(), "Fractions", "Add them", QuestType::Standard, 100);
//! store.put_quests(&[quest.clone()]).await?;
//!
//! let controller = ProgressionController::new(store, oracle, Theme::Fantasy);
//! let outcome = controller.submit(quest.id, "student-1", "1/2 + 1/4 = 3/4").await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

pub mod demo;
pub mod error;
pub mod export;
pub mod leveling;
pub mod oracle;
pub mod progression;
pub mod retry;
pub mod sanitize;
pub mod store;
pub mod theme;
pub mod types;

// Re-export key types for convenience
pub use error::{ImportError, OracleError, ProgressionError, StoreError};
pub use export::{import_package, ExportPackage, PACKAGE_VERSION};
pub use oracle::{
    Evaluation, EvaluationOracle, MockOracle, OllamaOracle, QuestDraft, DEFAULT_ORACLE_MODEL,
    DEFAULT_ORACLE_URL,
};
pub use progression::{
    LevelUp, ProgressionController, QuestOutcome, ARTIFACT_THRESHOLD, PASS_THRESHOLD,
};
pub use store::{ContentStore, JsonStore, MemoryStore};
pub use theme::{Theme, ThemeConfig};
pub use types::{
    Artifact, AvatarCustomization, KnowledgeCrystal, Position, Quest, QuestStatus, QuestType,
    Rarity, Realm, Role, Submission, UserProfile,
};

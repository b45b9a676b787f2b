//! Domain types for aetheria

mod artifact;
mod crystal;
mod profile;
mod quest;
mod realm;
mod submission;

pub use artifact::{Artifact, Rarity};
pub use crystal::KnowledgeCrystal;
pub use profile::{AvatarCustomization, Role, UserProfile};
pub use quest::{Quest, QuestStatus, QuestType};
pub use realm::{Position, Realm};
pub use submission::Submission;

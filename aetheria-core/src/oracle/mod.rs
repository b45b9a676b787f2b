//! The evaluation oracle: the external AI service that scores submissions,
//! writes study guides, and drafts redemption quests.

mod mock;
mod ollama;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::types::Quest;

pub use mock::MockOracle;
pub use ollama::{OllamaOracle, DEFAULT_ORACLE_MODEL, DEFAULT_ORACLE_URL};

/// A scored evaluation of a learner submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Score in 0..=100.
    pub score: u8,
    /// In-character feedback for the learner. Unsanitized; callers sanitize
    /// before persisting or rendering.
    pub feedback: String,
}

/// A name/description pair drafted by the oracle for a redemption quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestDraft {
    pub name: String,
    pub description: String,
}

/// Trait for evaluation oracles.
///
/// Implementations handle the actual call to the scoring service; the
/// progression controller stays free of transport concerns and is tested
/// against [`MockOracle`].
#[async_trait]
pub trait EvaluationOracle: Send + Sync {
    /// Score a learner's submission against a quest.
    async fn evaluate(&self, quest: &Quest, submission_text: &str)
    -> Result<Evaluation, OracleError>;

    /// Compose a study guide for a failed attempt.
    async fn study_guide(
        &self,
        quest: &Quest,
        submission_text: &str,
        score: u8,
    ) -> Result<String, OracleError>;

    /// Draft a simplified redemption quest from the original.
    async fn redemption_draft(&self, quest: &Quest) -> Result<QuestDraft, OracleError>;
}

//! Mock oracle for testing.
//!
//! MockOracle lets tests script evaluation results, study guides, and
//! redemption drafts ahead of time, enabling fast, deterministic testing of
//! progression logic without a running model.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Evaluation, EvaluationOracle, QuestDraft};
use crate::error::OracleError;
use crate::types::Quest;

/// Mock implementation of [`EvaluationOracle`].
///
/// Queue results with `queue_*()` before invoking the controller. Each call
/// consumes one queued result; an empty queue fails the call.
#[derive(Default)]
pub struct MockOracle {
    evaluations: Mutex<VecDeque<Result<Evaluation, OracleError>>>,
    guides: Mutex<VecDeque<Result<String, OracleError>>>,
    drafts: Mutex<VecDeque<Result<QuestDraft, OracleError>>>,
}

impl MockOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful evaluation.
    pub fn queue_score(&self, score: u8, feedback: &str) {
        self.evaluations.lock().unwrap().push_back(Ok(Evaluation {
            score,
            feedback: feedback.to_string(),
        }));
    }

    /// Queue a failing evaluation.
    pub fn queue_evaluation_error(&self, error: OracleError) {
        self.evaluations.lock().unwrap().push_back(Err(error));
    }

    /// Queue a successful study guide.
    pub fn queue_study_guide(&self, content: &str) {
        self.guides
            .lock()
            .unwrap()
            .push_back(Ok(content.to_string()));
    }

    /// Queue a failing study-guide call.
    pub fn queue_study_guide_error(&self, error: OracleError) {
        self.guides.lock().unwrap().push_back(Err(error));
    }

    /// Queue a successful redemption draft.
    pub fn queue_redemption(&self, name: &str, description: &str) {
        self.drafts.lock().unwrap().push_back(Ok(QuestDraft {
            name: name.to_string(),
            description: description.to_string(),
        }));
    }

    /// Queue a failing redemption-draft call.
    pub fn queue_redemption_error(&self, error: OracleError) {
        self.drafts.lock().unwrap().push_back(Err(error));
    }
}

#[async_trait]
impl EvaluationOracle for MockOracle {
    async fn evaluate(
        &self,
        _quest: &Quest,
        _submission_text: &str,
    ) -> Result<Evaluation, OracleError> {
        self.evaluations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(OracleError::Api("no queued evaluation in MockOracle".into())))
    }

    async fn study_guide(
        &self,
        _quest: &Quest,
        _submission_text: &str,
        _score: u8,
    ) -> Result<String, OracleError> {
        self.guides
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(OracleError::Api("no queued study guide in MockOracle".into())))
    }

    async fn redemption_draft(&self, _quest: &Quest) -> Result<QuestDraft, OracleError> {
        self.drafts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(OracleError::Api("no queued draft in MockOracle".into())))
    }
}

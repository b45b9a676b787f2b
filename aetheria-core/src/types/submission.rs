//! Submission: a learner's attempt at a quest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A learner's attempt at a quest.
///
/// Score and feedback are set together, atomically, once evaluation
/// completes. A submission is immutable history otherwise; re-grading
/// updates this record in place rather than creating a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub quest_id: Uuid,
    pub student_id: String,
    pub content: String,
    /// Evaluation score in 0..=100, present once evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluated_at: Option<DateTime<Utc>>,
}

impl Submission {
    /// Create an evaluated submission record.
    pub fn evaluated(
        quest_id: Uuid,
        student_id: impl Into<String>,
        content: impl Into<String>,
        score: u8,
        feedback: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            quest_id,
            student_id: student_id.into(),
            content: content.into(),
            score: Some(score),
            feedback: Some(feedback.into()),
            submitted_at: now,
            evaluated_at: Some(now),
        }
    }

    /// Apply a new grade in place: score, feedback, and evaluation
    /// timestamp change together.
    pub fn apply_grade(&mut self, score: u8, feedback: impl Into<String>) {
        self.score = Some(score);
        self.feedback = Some(feedback.into());
        self.evaluated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluated_submission_sets_score_and_feedback_together() {
        let sub = Submission::evaluated(Uuid::new_v4(), "student-1", "my answer", 84, "Good work");
        assert_eq!(sub.score, Some(84));
        assert_eq!(sub.feedback.as_deref(), Some("Good work"));
        assert!(sub.evaluated_at.is_some());
    }

    #[test]
    fn apply_grade_updates_all_three_fields() {
        let mut sub = Submission::evaluated(Uuid::new_v4(), "student-1", "answer", 40, "Needs work");
        let before = sub.evaluated_at;

        sub.apply_grade(75, "Reassessed");

        assert_eq!(sub.score, Some(75));
        assert_eq!(sub.feedback.as_deref(), Some("Reassessed"));
        assert!(sub.evaluated_at >= before);
    }

    #[test]
    fn submission_serialization_roundtrip() {
        let sub = Submission::evaluated(Uuid::new_v4(), "student-1", "answer", 99, "Stellar");
        let json = serde_json::to_string(&sub).unwrap();
        assert!(json.contains("\"questId\""));
        assert!(json.contains("\"submittedAt\""));
        let parsed: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(sub, parsed);
    }
}

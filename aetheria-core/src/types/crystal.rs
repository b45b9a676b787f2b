//! Knowledge crystal: a remedial study artifact generated after a failed
//! quest attempt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A study aid generated for a learner who failed a quest.
///
/// Attuning a crystal is a one-way transition (false -> true) and is the
/// trigger that unlocks any quest listing this crystal as a prerequisite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeCrystal {
    pub id: Uuid,
    pub quest_id: Uuid,
    pub student_id: String,
    pub title: String,
    /// Explanatory study-guide text (sanitized HTML).
    pub content: String,
    pub is_attuned: bool,
    pub created_at: DateTime<Utc>,
}

impl KnowledgeCrystal {
    /// Create an unattuned crystal for a failed quest attempt.
    pub fn new(
        quest_id: Uuid,
        student_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            quest_id,
            student_id: student_id.into(),
            title: title.into(),
            content: content.into(),
            is_attuned: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_crystal_starts_unattuned() {
        let crystal = KnowledgeCrystal::new(Uuid::new_v4(), "student-1", "Understanding X", "...");
        assert!(!crystal.is_attuned);
    }

    #[test]
    fn crystal_serializes_camel_case() {
        let crystal = KnowledgeCrystal::new(Uuid::new_v4(), "student-1", "title", "content");
        let json = serde_json::to_string(&crystal).unwrap();
        assert!(json.contains("\"isAttuned\":false"));
        assert!(json.contains("\"questId\""));
    }
}

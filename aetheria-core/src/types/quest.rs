//! Quest: a unit of work a learner can attempt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestType {
    /// Regular quest authored by a teacher.
    Standard,
    /// High-stakes quest, typically gating a realm.
    Boss,
    /// Simplified retry quest spawned after a failed attempt.
    Redemption,
}

/// Lifecycle status of a quest.
///
/// Transitions run `Locked -> Available -> Completed | Failed`. A failed
/// standard quest never reverts to `Available` on its own; only a linked
/// redemption quest unlocks, once its prerequisite crystal is attuned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Locked,
    Available,
    InProgress,
    Completed,
    Failed,
}

impl QuestStatus {
    /// Stable string form, matching the wire encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestStatus::Locked => "locked",
            QuestStatus::Available => "available",
            QuestStatus::InProgress => "in_progress",
            QuestStatus::Completed => "completed",
            QuestStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A learning task with an XP reward and lifecycle status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: Uuid,
    pub realm_id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: QuestType,
    pub xp_value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub status: QuestStatus,
    /// Knowledge-crystal ids that must be attuned before this quest unlocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisite_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Quest {
    /// Create a new teacher-authored quest, immediately available.
    pub fn new(
        realm_id: Uuid,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: QuestType,
        xp_value: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            realm_id,
            name: name.into(),
            description: description.into(),
            kind,
            xp_value,
            due_date: None,
            status: QuestStatus::Available,
            prerequisite_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a locked redemption quest gated on a knowledge crystal.
    ///
    /// The XP value is half the original quest's, rounded down.
    pub fn redemption(
        original: &Quest,
        name: impl Into<String>,
        description: impl Into<String>,
        crystal_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            realm_id: original.realm_id,
            name: name.into(),
            description: description.into(),
            kind: QuestType::Redemption,
            xp_value: original.xp_value / 2,
            due_date: None,
            status: QuestStatus::Locked,
            prerequisite_ids: vec![crystal_id],
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quest(xp: u32) -> Quest {
        Quest::new(
            Uuid::new_v4(),
            "Fractions of the Void",
            "Add the fractions",
            QuestType::Standard,
            xp,
        )
    }

    #[test]
    fn new_quest_is_available() {
        let quest = sample_quest(100);
        assert_eq!(quest.status, QuestStatus::Available);
        assert!(quest.prerequisite_ids.is_empty());
    }

    #[test]
    fn redemption_quest_halves_xp_and_locks() {
        let original = sample_quest(150);
        let crystal_id = Uuid::new_v4();
        let redemption = Quest::redemption(&original, "Retry", "Simpler", crystal_id);

        assert_eq!(redemption.xp_value, 75);
        assert_eq!(redemption.status, QuestStatus::Locked);
        assert_eq!(redemption.kind, QuestType::Redemption);
        assert_eq!(redemption.realm_id, original.realm_id);
        assert_eq!(redemption.prerequisite_ids, vec![crystal_id]);
    }

    #[test]
    fn redemption_xp_rounds_down() {
        let original = sample_quest(101);
        let redemption = Quest::redemption(&original, "Retry", "Simpler", Uuid::new_v4());
        assert_eq!(redemption.xp_value, 50);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&QuestStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn quest_serialization_roundtrip() {
        let quest = sample_quest(100);
        let json = serde_json::to_string(&quest).unwrap();
        assert!(json.contains("\"xpValue\""));
        assert!(json.contains("\"type\":\"standard\""));
        let parsed: Quest = serde_json::from_str(&json).unwrap();
        assert_eq!(quest, parsed);
    }
}

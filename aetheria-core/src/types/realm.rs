//! Realm: a named grouping of quests (a course, sector, domain...)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Position of a realm on the universe map.
///
/// Purely presentational; the core never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A named grouping/course containing quests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Realm {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Accent color as a CSS-style string (e.g. "#7c3aed").
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    pub created_at: DateTime<Utc>,
}

impl Realm {
    /// Create a new realm with a fresh id.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            color: color.into(),
            position: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_realm_has_fresh_id_and_no_position() {
        let a = Realm::new("Algebra", "Numbers and letters", "#7c3aed");
        let b = Realm::new("Algebra", "Numbers and letters", "#7c3aed");
        assert_ne!(a.id, b.id);
        assert!(a.position.is_none());
    }

    #[test]
    fn realm_serializes_camel_case() {
        let realm = Realm::new("Algebra", "desc", "#fff");
        let json = serde_json::to_string(&realm).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("\"position\""));
    }
}

//! User profile: a learner or teacher's persistent state.

use serde::{Deserialize, Serialize};

use super::Artifact;

/// Role of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Avatar appearance settings. Rendering happens elsewhere; the core only
/// stores the choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarCustomization {
    pub skin_tone: String,
    pub hair_style: String,
    pub hair_color: String,
    pub eye_color: String,
    pub body_type: String,
    pub outfit: String,
    pub outfit_color: String,
    #[serde(default)]
    pub accessories: Vec<String>,
}

/// A learner or teacher's persistent state.
///
/// `level` is always the value the leveling engine derives from `xp`; it is
/// cached at write time, never updated independently. For students, `xp` only
/// ever increases (through successful quest completion) and `artifacts` is
/// append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub xp: u32,
    pub level: u32,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<AvatarCustomization>,
}

impl UserProfile {
    /// Create a fresh profile with zero experience at level 1.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            xp: 0,
            level: 1,
            artifacts: Vec::new(),
            avatar: None,
        }
    }

    /// Default student profile created on first use.
    pub fn default_student(id: impl Into<String>) -> Self {
        Self::new(id, "Hero", Role::Student)
    }
}

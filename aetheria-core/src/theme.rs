//! Presentation themes and their fixed vocabularies.
//!
//! Everything theme-dependent (labels, titles, artifact word banks) hangs off
//! the [`Theme`] enum through exhaustive matches, so adding a theme is a
//! compile-checked change rather than a string-keyed lookup.

use serde::{Deserialize, Serialize};

/// Supported presentation themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Fantasy,
    Scifi,
    Medieval,
    Modern,
}

/// Labels and titles for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeConfig {
    pub name: &'static str,
    pub teacher_title: &'static str,
    pub student_title: &'static str,
    pub realm_label: &'static str,
    pub quest_label: &'static str,
    pub archive_label: &'static str,
    pub oracle_label: &'static str,
    pub xp_label: &'static str,
}

impl Theme {
    /// All themes, in cycling order.
    pub const ALL: [Theme; 4] = [Theme::Fantasy, Theme::Scifi, Theme::Medieval, Theme::Modern];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Fantasy => "fantasy",
            Theme::Scifi => "scifi",
            Theme::Medieval => "medieval",
            Theme::Modern => "modern",
        }
    }

    /// Labels and titles for this theme.
    pub fn config(&self) -> ThemeConfig {
        match self {
            Theme::Fantasy => ThemeConfig {
                name: "High Fantasy",
                teacher_title: "Game Master",
                student_title: "Adventurer",
                realm_label: "Realm",
                quest_label: "Quest",
                archive_label: "Archives",
                oracle_label: "Oracle",
                xp_label: "Glory",
            },
            Theme::Scifi => ThemeConfig {
                name: "Cyberpunk",
                teacher_title: "Admin",
                student_title: "Operative",
                realm_label: "Sector",
                quest_label: "Mission",
                archive_label: "Database",
                oracle_label: "AI Core",
                xp_label: "Data",
            },
            Theme::Medieval => ThemeConfig {
                name: "Royal Court",
                teacher_title: "Lord",
                student_title: "Vassal",
                realm_label: "Domain",
                quest_label: "Decree",
                archive_label: "Library",
                oracle_label: "Council",
                xp_label: "Honor",
            },
            Theme::Modern => ThemeConfig {
                name: "Glass Classroom",
                teacher_title: "Teacher",
                student_title: "Student",
                realm_label: "Course",
                quest_label: "Assignment",
                archive_label: "Resources",
                oracle_label: "Evaluator",
                xp_label: "Points",
            },
        }
    }

    /// Artifact name prefixes for this theme.
    pub fn artifact_prefixes(&self) -> &'static [&'static str] {
        match self {
            Theme::Fantasy => &["Enchanted", "Mystical", "Ancient", "Ethereal", "Radiant"],
            Theme::Scifi => &["Quantum", "Neural", "Encrypted", "Holographic", "Plasma"],
            Theme::Medieval => &["Royal", "Noble", "Heraldic", "Forged", "Sacred"],
            Theme::Modern => &["Digital", "Smart", "Advanced", "Innovative", "Premium"],
        }
    }

    /// Artifact name suffixes for this theme.
    pub fn artifact_suffixes(&self) -> &'static [&'static str] {
        match self {
            Theme::Fantasy => &["Scroll", "Tome", "Crystal", "Rune", "Amulet"],
            Theme::Scifi => &["Chip", "Core", "Drive", "Matrix", "Protocol"],
            Theme::Medieval => &["Seal", "Banner", "Crown", "Chalice", "Sigil"],
            Theme::Modern => &["Badge", "Certificate", "Award", "Token", "Medal"],
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Fantasy
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fantasy" => Ok(Theme::Fantasy),
            "scifi" => Ok(Theme::Scifi),
            "medieval" => Ok(Theme::Medieval),
            "modern" => Ok(Theme::Modern),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

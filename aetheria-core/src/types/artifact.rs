//! Artifact: a rarity-tiered collectible reward for high scores.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::theme::Theme;

/// Rarity tier of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Map an evaluation score to a rarity tier.
    ///
    /// Boundary values belong to the higher tier: 98 is legendary, 95 is
    /// epic, 90 is rare.
    pub fn from_score(score: u8) -> Self {
        match score {
            98..=u8::MAX => Rarity::Legendary,
            95..=97 => Rarity::Epic,
            90..=94 => Rarity::Rare,
            _ => Rarity::Common,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A collectible reward granted for exceptional quest performance.
///
/// Immutable once granted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub earned_at: DateTime<Utc>,
    /// Quest whose completion triggered this artifact.
    pub quest_id: Uuid,
}

impl Artifact {
    /// Mint an artifact for a high-scoring quest completion.
    ///
    /// The name combines a theme-specific prefix/suffix pair with a word
    /// drawn from the quest name; the rarity is derived from the score.
    pub fn for_quest(quest_id: Uuid, quest_name: &str, score: u8, theme: Theme) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: generate_name(quest_name, theme),
            description: format!(
                "Earned for exceptional performance on \"{}\". This artifact represents your mastery.",
                quest_name
            ),
            rarity: Rarity::from_score(score),
            earned_at: Utc::now(),
            quest_id,
        }
    }
}

/// Generate an artifact name like "Enchanted Tome of Fractions".
///
/// The concept word is any quest-name word longer than four characters,
/// falling back to "Mastery" for short names.
pub fn generate_name(quest_name: &str, theme: Theme) -> String {
    let mut rng = rand::thread_rng();

    let prefix = theme
        .artifact_prefixes()
        .choose(&mut rng)
        .copied()
        .unwrap_or("Curious");
    let suffix = theme
        .artifact_suffixes()
        .choose(&mut rng)
        .copied()
        .unwrap_or("Relic");

    let concept_words: Vec<&str> = quest_name.split(' ').filter(|w| w.len() > 4).collect();
    let concept = concept_words.choose(&mut rng).copied().unwrap_or("Mastery");

    format!("{} {} of {}", prefix, suffix, concept)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Rarity Tests ====================

    #[test]
    fn rarity_tier_boundaries() {
        assert_eq!(Rarity::from_score(89), Rarity::Common);
        assert_eq!(Rarity::from_score(90), Rarity::Rare);
        assert_eq!(Rarity::from_score(94), Rarity::Rare);
        assert_eq!(Rarity::from_score(95), Rarity::Epic);
        assert_eq!(Rarity::from_score(97), Rarity::Epic);
        assert_eq!(Rarity::from_score(98), Rarity::Legendary);
        assert_eq!(Rarity::from_score(100), Rarity::Legendary);
    }

    #[test]
    fn rarity_is_monotone_in_score() {
        let mut previous = Rarity::from_score(0);
        for score in 0..=100u8 {
            let rarity = Rarity::from_score(score);
            assert!(rarity >= previous, "rarity dropped at score {}", score);
            previous = rarity;
        }
    }

    #[test]
    fn rarity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Rarity::Legendary).unwrap(),
            "\"legendary\""
        );
    }

    // ==================== Name Generation Tests ====================

    #[test]
    fn generated_name_uses_theme_vocabulary() {
        let name = generate_name("Fractions of the Void", Theme::Fantasy);
        let prefix_ok = Theme::Fantasy
            .artifact_prefixes()
            .iter()
            .any(|p| name.starts_with(p));
        assert!(prefix_ok, "unexpected name: {}", name);
        assert!(name.contains(" of "));
    }

    #[test]
    fn generated_name_picks_long_quest_word() {
        // Only "Fractions" is longer than four characters.
        let name = generate_name("Fractions of the Void", Theme::Modern);
        assert!(name.ends_with("Fractions"), "unexpected name: {}", name);
    }

    #[test]
    fn generated_name_falls_back_to_mastery() {
        let name = generate_name("Sums", Theme::Scifi);
        assert!(name.ends_with("Mastery"), "unexpected name: {}", name);
    }

    #[test]
    fn artifact_for_quest_derives_rarity() {
        let artifact = Artifact::for_quest(Uuid::new_v4(), "Quantum Entanglement", 98, Theme::Scifi);
        assert_eq!(artifact.rarity, Rarity::Legendary);
        assert!(artifact.description.contains("Quantum Entanglement"));
    }
}

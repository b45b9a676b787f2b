//! Seeded demo world for exploring a fresh install.
//!
//! Three realms with quests in mixed states and a level-2 student profile,
//! so the quest lists, attunement flow, and profile view all have something
//! to show before any real content exists.

use crate::types::{Artifact, Quest, QuestStatus, QuestType, Rarity, Realm, Role, UserProfile};
use chrono::Utc;
use uuid::Uuid;

/// Identifier of the demo student profile.
pub const DEMO_STUDENT_ID: &str = "demo-student";

/// Three demo realms covering distinct subjects.
pub fn demo_realms() -> Vec<Realm> {
    vec![
        Realm::new(
            "Mathematics Archipelago",
            "A mystical chain of islands where numbers come alive and equations \
             dance in the wind. Master the ancient arts of algebra and geometry.",
            "#3b82f6",
        ),
        Realm::new(
            "Science Citadel",
            "A towering fortress of discovery where physics, chemistry, and \
             biology converge. Conduct experiments and unlock the secrets of \
             the natural world.",
            "#10b981",
        ),
        Realm::new(
            "Literature Labyrinth",
            "An ever-shifting maze of stories and poems. Navigate through \
             classic tales and modern narratives to find your way to literary \
             mastery.",
            "#8b5cf6",
        ),
    ]
}

/// Demo quests distributed over the given realms, in mixed states.
///
/// Realms beyond the first three are ignored; fewer realms get fewer quests.
pub fn demo_quests(realms: &[Realm]) -> Vec<Quest> {
    let mut quests = Vec::new();

    if let Some(math) = realms.first() {
        quests.push(Quest::new(
            math.id,
            "The Equation Enigma",
            "Ancient scrolls have been discovered containing mysterious \
             equations. Solve them to unlock the first portal of the \
             Mathematics Archipelago.",
            QuestType::Standard,
            50,
        ));
        let mut guardians = Quest::new(
            math.id,
            "Geometric Guardians",
            "Three geometric guardians block your path. Answer their riddles \
             about shapes, angles, and transformations to proceed.",
            QuestType::Standard,
            75,
        );
        guardians.status = QuestStatus::Locked;
        quests.push(guardians);
    }

    if let Some(science) = realms.get(1) {
        quests.push(Quest::new(
            science.id,
            "Chemistry Conundrum",
            "The Citadel's laboratory needs your help! Balance chemical \
             equations and identify compounds to restore order to the \
             Science Citadel.",
            QuestType::Standard,
            100,
        ));
    }

    if let Some(literature) = realms.get(2) {
        quests.push(Quest::new(
            literature.id,
            "Tale of Two Poets",
            "Compare and contrast two famous poems from different eras. \
             Analyze their themes, structures, and historical contexts.",
            QuestType::Boss,
            150,
        ));
    }

    quests
}

/// A level-2 student profile with one common artifact already earned.
pub fn demo_profile() -> UserProfile {
    let mut profile = UserProfile::new(DEMO_STUDENT_ID, "Explorer", Role::Student);
    profile.xp = 125;
    profile.level = 2;
    profile.artifacts.push(Artifact {
        id: Uuid::new_v4(),
        name: "Beginner's Compass".to_string(),
        description: "A mystical compass that guides new adventurers through \
                      their first quests."
            .to_string(),
        rarity: Rarity::Common,
        earned_at: Utc::now(),
        quest_id: Uuid::new_v4(),
    });
    profile
}

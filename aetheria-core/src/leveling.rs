//! Leveling engine: pure mapping from accumulated XP to level and title.

use crate::types::Role;

/// XP required to reach each level; index i holds the floor of level i + 1.
const LEVEL_THRESHOLDS: [u32; 8] = [0, 100, 250, 500, 1000, 2000, 4000, 8000];

/// Extended table used for "XP until next level" progress bars; the final
/// entry is the ceiling shown at max level.
const NEXT_LEVEL_THRESHOLDS: [u32; 9] = [0, 100, 250, 500, 1000, 2000, 4000, 8000, 16000];

const STUDENT_TITLES: [&str; 8] = [
    "Novice",
    "Apprentice",
    "Adept",
    "Expert",
    "Master",
    "Champion",
    "Hero",
    "Legend",
];

const TEACHER_TITLES: [&str; 8] = [
    "Initiate",
    "Mentor",
    "Master",
    "Sage",
    "Archmaster",
    "Legend",
    "Eternal",
    "Transcendent",
];

/// Level for a given XP total: one plus the index of the highest threshold
/// at or below `xp`. Total over all u32 input; 0 XP is level 1.
pub fn level_for_xp(xp: u32) -> u32 {
    let mut level = 1;
    for (i, threshold) in LEVEL_THRESHOLDS.iter().enumerate() {
        if xp >= *threshold {
            level = i as u32 + 1;
        }
    }
    level
}

/// XP threshold at which the current level's ceiling is reached, clamped to
/// the table's last entry at max level. Used to render progress bars.
pub fn xp_for_next_level(xp: u32) -> u32 {
    let level = level_for_xp(xp) as usize;
    NEXT_LEVEL_THRESHOLDS
        .get(level)
        .copied()
        .unwrap_or(NEXT_LEVEL_THRESHOLDS[NEXT_LEVEL_THRESHOLDS.len() - 1])
}

/// Title for a level and role; levels past the table clamp to the last title.
pub fn title_for_level(level: u32, role: Role) -> &'static str {
    let titles = match role {
        Role::Student => &STUDENT_TITLES,
        Role::Teacher => &TEACHER_TITLES,
    };
    let index = (level.max(1) as usize - 1).min(titles.len() - 1);
    titles[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Level Tests ====================

    #[test]
    fn level_boundaries() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(99), 1);
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(249), 2);
        assert_eq!(level_for_xp(250), 3);
        assert_eq!(level_for_xp(8000), 8);
        assert_eq!(level_for_xp(u32::MAX), 8);
    }

    #[test]
    fn level_is_monotone_in_xp() {
        let mut previous = 0;
        for xp in (0..10_000).step_by(7) {
            let level = level_for_xp(xp);
            assert!(level >= previous, "level dropped at xp {}", xp);
            previous = level;
        }
    }

    // ==================== Progress Tests ====================

    #[test]
    fn next_level_thresholds() {
        assert_eq!(xp_for_next_level(0), 100);
        assert_eq!(xp_for_next_level(99), 100);
        assert_eq!(xp_for_next_level(100), 250);
        assert_eq!(xp_for_next_level(4000), 8000);
        assert_eq!(xp_for_next_level(8000), 16000);
        assert_eq!(xp_for_next_level(20_000), 16000);
    }

    // ==================== Title Tests ====================

    #[test]
    fn student_titles_span_the_table() {
        assert_eq!(title_for_level(1, Role::Student), "Novice");
        assert_eq!(title_for_level(8, Role::Student), "Legend");
    }

    #[test]
    fn titles_clamp_past_the_table() {
        assert_eq!(title_for_level(100, Role::Student), "Legend");
        assert_eq!(title_for_level(100, Role::Teacher), "Transcendent");
    }

    #[test]
    fn teacher_titles_differ_from_student_titles() {
        assert_eq!(title_for_level(1, Role::Teacher), "Initiate");
        assert_eq!(title_for_level(4, Role::Teacher), "Sage");
    }

    #[test]
    fn level_zero_clamps_to_first_title() {
        assert_eq!(title_for_level(0, Role::Student), "Novice");
    }
}

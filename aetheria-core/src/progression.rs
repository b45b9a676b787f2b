//! Quest progression: the submission workflow and crystal attunement.
//!
//! One controller invocation runs a whole submission to completion: oracle
//! evaluation, submission recording, then either the pass branch (XP, level,
//! artifact) or the fail branch (quest failed, knowledge crystal, redemption
//! quest). The controller holds no entity state of its own; every operation
//! reads the current collections from the store and writes the new ones back.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ProgressionError;
use crate::leveling::{level_for_xp, title_for_level};
use crate::oracle::EvaluationOracle;
use crate::sanitize::{sanitize_html, sanitize_plain_text};
use crate::store::ContentStore;
use crate::theme::Theme;
use crate::types::{
    Artifact, KnowledgeCrystal, Quest, QuestStatus, Submission, UserProfile,
};

/// Score at or above which a submission passes. Fixed, not per-quest.
pub const PASS_THRESHOLD: u8 = 70;

/// Score at or above which a passing submission also mints an artifact.
pub const ARTIFACT_THRESHOLD: u8 = 90;

/// A level increase surfaced to the caller for celebration. Notification
/// data only; the new level itself is stored on the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub title: &'static str,
}

/// Result of a quest submission, for the caller to present.
#[derive(Debug, Clone)]
pub enum QuestOutcome {
    /// Score reached the pass threshold.
    Passed {
        submission: Submission,
        xp_gained: u32,
        level_up: Option<LevelUp>,
        artifact: Option<Artifact>,
    },
    /// Score fell short; a study aid and a locked retry were generated.
    Failed {
        submission: Submission,
        crystal: KnowledgeCrystal,
        redemption: Quest,
    },
}

/// The quest-submission workflow.
pub struct ProgressionController {
    store: Arc<dyn ContentStore>,
    oracle: Arc<dyn EvaluationOracle>,
    theme: Theme,
}

impl ProgressionController {
    pub fn new(
        store: Arc<dyn ContentStore>,
        oracle: Arc<dyn EvaluationOracle>,
        theme: Theme,
    ) -> Self {
        Self {
            store,
            oracle,
            theme,
        }
    }

    /// Submit a learner's answer for a quest and run the full progression
    /// workflow.
    ///
    /// An evaluation failure aborts before any mutation. Once the submission
    /// and quest status are committed, failures in the follow-up generation
    /// calls (study guide, redemption draft) propagate without rolling the
    /// committed state back.
    pub async fn submit(
        &self,
        quest_id: Uuid,
        student_id: &str,
        content: &str,
    ) -> Result<QuestOutcome, ProgressionError> {
        if content.trim().is_empty() {
            return Err(ProgressionError::EmptySubmission);
        }

        let mut quests = self.store.quests().await?;
        let quest = quests
            .iter()
            .find(|q| q.id == quest_id)
            .cloned()
            .ok_or(ProgressionError::QuestNotFound(quest_id))?;

        // The UI gates access too, but re-validate here so a stale caller
        // cannot submit against a locked or already-completed quest.
        if matches!(quest.status, QuestStatus::Locked | QuestStatus::Completed) {
            return Err(ProgressionError::InvalidQuestState {
                quest_id,
                status: quest.status,
            });
        }

        // Evaluation failures abort here, before any mutation.
        let evaluation = self.oracle.evaluate(&quest, content).await?;
        let feedback = sanitize_html(&evaluation.feedback);

        info!(
            quest_id = %quest_id,
            student_id,
            score = evaluation.score,
            "submission evaluated"
        );

        let submission =
            Submission::evaluated(quest_id, student_id, content, evaluation.score, feedback);
        let mut submissions = self.store.submissions().await?;
        submissions.push(submission.clone());
        self.store.put_submissions(&submissions).await?;

        if evaluation.score >= PASS_THRESHOLD {
            self.complete_quest(&mut quests, &quest, &submission, student_id)
                .await
        } else {
            self.fail_quest(&mut quests, &quest, &submission, student_id, content)
                .await
        }
    }

    /// Pass branch: award XP, recompute level, mark completed, and mint an
    /// artifact for exceptional scores.
    async fn complete_quest(
        &self,
        quests: &mut [Quest],
        quest: &Quest,
        submission: &Submission,
        student_id: &str,
    ) -> Result<QuestOutcome, ProgressionError> {
        let score = submission.score.unwrap_or(0);

        let mut profile = self
            .store
            .profile()
            .await?
            .unwrap_or_else(|| UserProfile::default_student(student_id));

        let old_level = profile.level;
        profile.xp = profile.xp.saturating_add(quest.xp_value);
        profile.level = level_for_xp(profile.xp);

        let level_up = (profile.level > old_level).then(|| LevelUp {
            level: profile.level,
            title: title_for_level(profile.level, profile.role),
        });
        if let Some(up) = &level_up {
            info!(level = up.level, title = up.title, "level up");
        }

        let artifact = (score >= ARTIFACT_THRESHOLD)
            .then(|| Artifact::for_quest(quest.id, &quest.name, score, self.theme));
        if let Some(found) = &artifact {
            info!(name = %found.name, rarity = %found.rarity, "artifact earned");
            profile.artifacts.push(found.clone());
        }

        self.store.put_profile(&profile).await?;

        set_status(quests, quest.id, QuestStatus::Completed);
        self.store.put_quests(quests).await?;

        Ok(QuestOutcome::Passed {
            submission: submission.clone(),
            xp_gained: quest.xp_value,
            level_up,
            artifact,
        })
    }

    /// Fail branch: mark the quest failed, then generate the study crystal
    /// and the locked redemption quest.
    ///
    /// The failed status is committed before the generation calls; if one of
    /// them fails after retries, the learner keeps the failed quest and the
    /// recorded submission with no crystal or redemption quest.
    async fn fail_quest(
        &self,
        quests: &mut Vec<Quest>,
        quest: &Quest,
        submission: &Submission,
        student_id: &str,
        content: &str,
    ) -> Result<QuestOutcome, ProgressionError> {
        let score = submission.score.unwrap_or(0);

        set_status(quests, quest.id, QuestStatus::Failed);
        self.store.put_quests(quests).await?;

        let guide = match self.oracle.study_guide(quest, content, score).await {
            Ok(guide) => guide,
            Err(err) => {
                warn!(quest_id = %quest.id, error = %err, "study guide generation failed");
                return Err(err.into());
            }
        };

        let crystal = KnowledgeCrystal::new(
            quest.id,
            student_id,
            format!("Understanding {}", quest.name),
            sanitize_html(&guide),
        );
        let mut crystals = self.store.crystals().await?;
        crystals.push(crystal.clone());
        self.store.put_crystals(&crystals).await?;

        let draft = match self.oracle.redemption_draft(quest).await {
            Ok(draft) => draft,
            Err(err) => {
                warn!(quest_id = %quest.id, error = %err, "redemption draft generation failed");
                return Err(err.into());
            }
        };

        let redemption = Quest::redemption(
            quest,
            sanitize_plain_text(&draft.name),
            sanitize_html(&draft.description),
            crystal.id,
        );
        quests.push(redemption.clone());
        self.store.put_quests(quests).await?;

        info!(
            quest_id = %quest.id,
            crystal_id = %crystal.id,
            redemption_id = %redemption.id,
            "redemption path created"
        );

        Ok(QuestOutcome::Failed {
            submission: submission.clone(),
            crystal,
            redemption,
        })
    }

    /// Attune a knowledge crystal and unlock every locked quest gated on it.
    ///
    /// Idempotent: attuning an already-attuned crystal succeeds without a
    /// second flag write. Returns the ids of quests that became available.
    pub async fn attune_crystal(&self, crystal_id: Uuid) -> Result<Vec<Uuid>, ProgressionError> {
        let mut crystals = self.store.crystals().await?;
        let crystal = crystals
            .iter_mut()
            .find(|c| c.id == crystal_id)
            .ok_or(ProgressionError::CrystalNotFound(crystal_id))?;

        if !crystal.is_attuned {
            crystal.is_attuned = true;
            self.store.put_crystals(&crystals).await?;
        }

        let mut quests = self.store.quests().await?;
        let mut unlocked = Vec::new();
        for quest in quests.iter_mut() {
            if quest.status == QuestStatus::Locked && quest.prerequisite_ids.contains(&crystal_id)
            {
                quest.status = QuestStatus::Available;
                unlocked.push(quest.id);
            }
        }
        if !unlocked.is_empty() {
            self.store.put_quests(&quests).await?;
            info!(crystal_id = %crystal_id, unlocked = unlocked.len(), "quests unlocked");
        }

        Ok(unlocked)
    }

    /// Manually re-grade a submission (teacher action).
    ///
    /// Updates the existing record in place: score, sanitized feedback, and
    /// the evaluation timestamp change together.
    pub async fn regrade(
        &self,
        submission_id: Uuid,
        score: u32,
        feedback: &str,
    ) -> Result<Submission, ProgressionError> {
        if score > 100 {
            return Err(ProgressionError::ScoreOutOfRange(score));
        }

        let mut submissions = self.store.submissions().await?;
        let submission = submissions
            .iter_mut()
            .find(|s| s.id == submission_id)
            .ok_or(ProgressionError::SubmissionNotFound(submission_id))?;

        submission.apply_grade(score as u8, sanitize_html(feedback));
        let updated = submission.clone();
        self.store.put_submissions(&submissions).await?;

        info!(submission_id = %submission_id, score, "submission re-graded");
        Ok(updated)
    }
}

fn set_status(quests: &mut [Quest], quest_id: Uuid, status: QuestStatus) {
    if let Some(quest) = quests.iter_mut().find(|q| q.id == quest_id) {
        quest.status = status;
    }
}

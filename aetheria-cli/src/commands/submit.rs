//! Quest submission command

use anyhow::Result;
use clap::Args;
use uuid::Uuid;

use aetheria_core::QuestOutcome;

use crate::config::AetheriaConfig;

/// Submission arguments
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Quest to submit against
    pub quest_id: Uuid,

    /// Submitting student id
    #[arg(short, long, default_value = "student-1")]
    pub student: String,

    /// Submission text
    #[arg(short, long)]
    pub text: String,
}

pub async fn run(args: SubmitArgs) -> Result<()> {
    let config = AetheriaConfig::load()?;
    let controller = super::controller(&config);
    let labels = config.theme.config();

    let outcome = controller
        .submit(args.quest_id, &args.student, &args.text)
        .await?;

    match outcome {
        QuestOutcome::Passed {
            submission,
            xp_gained,
            level_up,
            artifact,
        } => {
            println!(
                "{} complete! Score {} (+{} {})",
                labels.quest_label,
                submission.score.unwrap_or(0),
                xp_gained,
                labels.xp_label
            );
            if let Some(feedback) = &submission.feedback {
                println!("\n{feedback}");
            }
            if let Some(up) = level_up {
                println!("\nLevel up! You are now level {} ({})", up.level, up.title);
            }
            if let Some(artifact) = artifact {
                println!(
                    "\nArtifact earned: {} [{}]",
                    artifact.name, artifact.rarity
                );
            }
        }
        QuestOutcome::Failed {
            submission,
            crystal,
            redemption,
        } => {
            println!(
                "{} failed. Score {}",
                labels.quest_label,
                submission.score.unwrap_or(0)
            );
            if let Some(feedback) = &submission.feedback {
                println!("\n{feedback}");
            }
            println!("\nA knowledge crystal was forged: \"{}\"", crystal.title);
            println!("  attune it with: aetheria attune {}", crystal.id);
            println!(
                "\nRedemption {} \"{}\" awaits ({} {}), unlocked by that crystal.",
                labels.quest_label, redemption.name, redemption.xp_value, labels.xp_label
            );
        }
    }

    Ok(())
}

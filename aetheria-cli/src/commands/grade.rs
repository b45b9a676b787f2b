//! Manual re-grading command

use anyhow::Result;
use clap::Args;
use uuid::Uuid;

use crate::config::AetheriaConfig;

/// Re-grading arguments
#[derive(Args, Debug)]
pub struct GradeArgs {
    /// Submission to re-grade
    pub submission_id: Uuid,

    /// New score (0-100)
    #[arg(short, long)]
    pub score: u32,

    /// New feedback text
    #[arg(short, long)]
    pub feedback: String,
}

pub async fn run(args: GradeArgs) -> Result<()> {
    let config = AetheriaConfig::load()?;
    let controller = super::controller(&config);

    let updated = controller
        .regrade(args.submission_id, args.score, &args.feedback)
        .await?;

    println!(
        "Submission {} re-graded to {}",
        updated.id,
        updated.score.unwrap_or(0)
    );
    Ok(())
}

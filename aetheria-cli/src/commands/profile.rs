//! Profile display command

use anyhow::Result;
use clap::{Args, Subcommand};

use aetheria_core::leveling::{title_for_level, xp_for_next_level};
use aetheria_core::ContentStore;

use crate::config::AetheriaConfig;

/// Profile arguments
#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommands,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the current learner profile
    Show,
}

pub async fn run(args: ProfileArgs) -> Result<()> {
    let config = AetheriaConfig::load()?;
    let store = super::open_store(&config);
    let labels = config.theme.config();

    match args.command {
        ProfileCommands::Show => {
            let Some(profile) = store.profile().await? else {
                println!("No profile yet. Complete a quest to create one.");
                return Ok(());
            };

            let title = title_for_level(profile.level, profile.role);
            println!("{} ({})", profile.name, profile.role);
            println!(
                "Level {} {} - {} / {} {}",
                profile.level,
                title,
                profile.xp,
                xp_for_next_level(profile.xp),
                labels.xp_label
            );

            if profile.artifacts.is_empty() {
                println!("\nNo artifacts in the {} yet.", labels.archive_label);
            } else {
                println!("\n{}:", labels.archive_label);
                for artifact in &profile.artifacts {
                    println!("  [{}] {}", artifact.rarity, artifact.name);
                }
            }
            Ok(())
        }
    }
}

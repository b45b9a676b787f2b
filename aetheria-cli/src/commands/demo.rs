//! Demo seeding command

use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::info;

use aetheria_core::demo::{demo_profile, demo_quests, demo_realms};
use aetheria_core::ContentStore;

use crate::config::AetheriaConfig;

/// Demo arguments
#[derive(Args, Debug)]
pub struct DemoArgs {
    #[command(subcommand)]
    pub command: DemoCommands,
}

#[derive(Subcommand, Debug)]
pub enum DemoCommands {
    /// Write the demo world to the content store
    Seed {
        /// Overwrite existing content
        #[arg(long)]
        force: bool,
    },
}

pub async fn run(args: DemoArgs) -> Result<()> {
    let config = AetheriaConfig::load()?;
    let store = super::open_store(&config);

    match args.command {
        DemoCommands::Seed { force } => {
            if !force && !store.realms().await?.is_empty() {
                anyhow::bail!("store already has content; pass --force to overwrite");
            }

            let realms = demo_realms();
            let quests = demo_quests(&realms);
            store.put_realms(&realms).await?;
            store.put_quests(&quests).await?;
            store.put_profile(&demo_profile()).await?;

            info!(realms = realms.len(), quests = quests.len(), "demo seeded");
            println!(
                "Seeded {} realms and {} quests. Try `aetheria quest list`.",
                realms.len(),
                quests.len()
            );
            Ok(())
        }
    }
}

//! Crystal attunement command

use anyhow::Result;
use clap::Args;
use uuid::Uuid;

use crate::config::AetheriaConfig;

/// Attunement arguments
#[derive(Args, Debug)]
pub struct AttuneArgs {
    /// Crystal to attune
    pub crystal_id: Uuid,
}

pub async fn run(args: AttuneArgs) -> Result<()> {
    let config = AetheriaConfig::load()?;
    let controller = super::controller(&config);

    let unlocked = controller.attune_crystal(args.crystal_id).await?;

    println!("Crystal attuned.");
    if unlocked.is_empty() {
        println!("No quests were waiting on it.");
    } else {
        println!("Unlocked {} quest(s):", unlocked.len());
        for id in unlocked {
            println!("  {id}");
        }
    }
    Ok(())
}

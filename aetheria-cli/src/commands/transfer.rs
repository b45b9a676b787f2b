//! Curriculum export/import commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::info;

use aetheria_core::{import_package, ContentStore, ExportPackage};

use crate::config::AetheriaConfig;

/// Transfer arguments
#[derive(Args, Debug)]
pub struct TransferArgs {
    #[command(subcommand)]
    pub command: TransferCommands,
}

#[derive(Subcommand, Debug)]
pub enum TransferCommands {
    /// Export realms and quests to a JSON package
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import a JSON package, adding its content with fresh ids
    Import {
        /// Package file to import
        file: PathBuf,
    },
}

pub async fn run(args: TransferArgs) -> Result<()> {
    let config = AetheriaConfig::load()?;
    let store = super::open_store(&config);

    match args.command {
        TransferCommands::Export { output } => {
            let realms = store.realms().await?;
            let quests = store.quests().await?;
            let package = ExportPackage::new(realms, quests, config.theme);
            let json = package.to_json()?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!(
                        "Exported {} realm(s) and {} quest(s) to {}",
                        package.realms.len(),
                        package.quests.len(),
                        path.display()
                    );
                }
                None => println!("{json}"),
            }
            Ok(())
        }
        TransferCommands::Import { file } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let package = ExportPackage::from_json(&json)?;
            let (new_realms, new_quests) = import_package(package)?;

            let mut realms = store.realms().await?;
            let mut quests = store.quests().await?;
            let realm_count = new_realms.len();
            let quest_count = new_quests.len();
            realms.extend(new_realms);
            quests.extend(new_quests);
            store.put_realms(&realms).await?;
            store.put_quests(&quests).await?;

            info!(realm_count, quest_count, "package imported");
            println!("Imported {realm_count} realm(s) and {quest_count} quest(s).");
            Ok(())
        }
    }
}

//! Knowledge crystal listing

use anyhow::Result;
use clap::{Args, Subcommand};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use aetheria_core::ContentStore;

use crate::config::AetheriaConfig;

/// Crystal listing arguments
#[derive(Args, Debug)]
pub struct CrystalsArgs {
    #[command(subcommand)]
    pub command: CrystalsCommands,
}

#[derive(Subcommand, Debug)]
pub enum CrystalsCommands {
    /// List all knowledge crystals
    List,
}

pub async fn run(args: CrystalsArgs) -> Result<()> {
    let config = AetheriaConfig::load()?;
    let store = super::open_store(&config);

    match args.command {
        CrystalsCommands::List => {
            let crystals = store.crystals().await?;
            if crystals.is_empty() {
                println!("No knowledge crystals yet.");
                return Ok(());
            }

            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![
                Cell::new("Id").fg(Color::Cyan),
                Cell::new("Title").fg(Color::Cyan),
                Cell::new("Attuned").fg(Color::Cyan),
            ]);
            for crystal in &crystals {
                table.add_row(vec![
                    Cell::new(crystal.id),
                    Cell::new(&crystal.title),
                    Cell::new(if crystal.is_attuned { "yes" } else { "no" }),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}

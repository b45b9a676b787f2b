//! Realm management commands

use anyhow::Result;
use clap::{Args, Subcommand};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use tracing::info;

use aetheria_core::{ContentStore, Realm};

use crate::config::AetheriaConfig;

/// Realm management arguments
#[derive(Args, Debug)]
pub struct RealmArgs {
    #[command(subcommand)]
    pub command: RealmCommands,
}

#[derive(Subcommand, Debug)]
pub enum RealmCommands {
    /// Create a new realm
    Create {
        /// Realm name
        name: String,
        /// Realm description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Accent color (CSS-style)
        #[arg(short, long, default_value = "#7c3aed")]
        color: String,
    },
    /// List all realms
    List,
}

pub async fn run(args: RealmArgs) -> Result<()> {
    let config = AetheriaConfig::load()?;
    let store = super::open_store(&config);

    match args.command {
        RealmCommands::Create {
            name,
            description,
            color,
        } => {
            if name.trim().is_empty() {
                anyhow::bail!("realm name must not be empty");
            }
            let realm = Realm::new(name, description, color);
            let mut realms = store.realms().await?;
            realms.push(realm.clone());
            store.put_realms(&realms).await?;

            info!(realm_id = %realm.id, "realm created");
            println!("Created {} \"{}\"", config.theme.config().realm_label, realm.name);
            println!("  id: {}", realm.id);
            Ok(())
        }
        RealmCommands::List => {
            let realms = store.realms().await?;
            if realms.is_empty() {
                println!("No realms yet. Create one with `aetheria realm create <name>`.");
                return Ok(());
            }

            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![
                Cell::new("Id").fg(Color::Cyan),
                Cell::new("Name").fg(Color::Cyan),
                Cell::new("Description").fg(Color::Cyan),
            ]);
            for realm in &realms {
                table.add_row(vec![
                    Cell::new(realm.id),
                    Cell::new(&realm.name),
                    Cell::new(&realm.description),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}

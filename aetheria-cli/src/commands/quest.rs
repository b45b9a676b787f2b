//! Quest management commands

use anyhow::Result;
use clap::{Args, Subcommand};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use tracing::info;
use uuid::Uuid;

use aetheria_core::{ContentStore, Quest, QuestType};

use crate::config::AetheriaConfig;

/// Quest management arguments
#[derive(Args, Debug)]
pub struct QuestArgs {
    #[command(subcommand)]
    pub command: QuestCommands,
}

#[derive(Subcommand, Debug)]
pub enum QuestCommands {
    /// Create a new quest in a realm
    Create {
        /// Realm the quest belongs to
        realm_id: Uuid,
        /// Quest name
        name: String,
        /// Quest description
        #[arg(short, long, default_value = "")]
        description: String,
        /// XP awarded on completion
        #[arg(short, long, default_value_t = 100)]
        xp: u32,
        /// Mark as a boss quest
        #[arg(long)]
        boss: bool,
    },
    /// List quests, optionally filtered by realm
    List {
        /// Only show quests in this realm
        #[arg(short, long)]
        realm: Option<Uuid>,
    },
}

pub async fn run(args: QuestArgs) -> Result<()> {
    let config = AetheriaConfig::load()?;
    let store = super::open_store(&config);

    match args.command {
        QuestCommands::Create {
            realm_id,
            name,
            description,
            xp,
            boss,
        } => {
            if name.trim().is_empty() {
                anyhow::bail!("quest name must not be empty");
            }
            let realms = store.realms().await?;
            if !realms.iter().any(|r| r.id == realm_id) {
                anyhow::bail!("no realm with id {realm_id}");
            }

            let kind = if boss {
                QuestType::Boss
            } else {
                QuestType::Standard
            };
            let quest = Quest::new(realm_id, name, description, kind, xp);
            let mut quests = store.quests().await?;
            quests.push(quest.clone());
            store.put_quests(&quests).await?;

            info!(quest_id = %quest.id, xp, "quest created");
            println!(
                "Created {} \"{}\" worth {} {}",
                config.theme.config().quest_label,
                quest.name,
                quest.xp_value,
                config.theme.config().xp_label
            );
            println!("  id: {}", quest.id);
            Ok(())
        }
        QuestCommands::List { realm } => {
            let quests = store.quests().await?;
            let quests: Vec<&Quest> = quests
                .iter()
                .filter(|q| realm.is_none_or(|r| q.realm_id == r))
                .collect();
            if quests.is_empty() {
                println!("No quests found.");
                return Ok(());
            }

            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![
                Cell::new("Id").fg(Color::Cyan),
                Cell::new("Name").fg(Color::Cyan),
                Cell::new("Status").fg(Color::Cyan),
                Cell::new("XP").fg(Color::Cyan),
            ]);
            for quest in quests {
                table.add_row(vec![
                    Cell::new(quest.id),
                    Cell::new(&quest.name),
                    Cell::new(quest.status),
                    Cell::new(quest.xp_value),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "aetheria", about = "Gamified quest progression for learning")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage realms (course groupings)
    Realm(commands::realm::RealmArgs),
    /// Manage quests
    Quest(commands::quest::QuestArgs),
    /// Submit an answer to a quest
    Submit(commands::submit::SubmitArgs),
    /// Attune a knowledge crystal, unlocking its redemption quest
    Attune(commands::attune::AttuneArgs),
    /// List knowledge crystals
    Crystals(commands::crystals::CrystalsArgs),
    /// Manually re-grade a submission
    Grade(commands::grade::GradeArgs),
    /// Show the learner profile
    Profile(commands::profile::ProfileArgs),
    /// Export or import curriculum packages
    Transfer(commands::transfer::TransferArgs),
    /// Seed the store with demo content
    Demo(commands::demo::DemoArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Realm(args) => commands::realm::run(args).await,
        Commands::Quest(args) => commands::quest::run(args).await,
        Commands::Submit(args) => commands::submit::run(args).await,
        Commands::Attune(args) => commands::attune::run(args).await,
        Commands::Crystals(args) => commands::crystals::run(args).await,
        Commands::Grade(args) => commands::grade::run(args).await,
        Commands::Profile(args) => commands::profile::run(args).await,
        Commands::Transfer(args) => commands::transfer::run(args).await,
        Commands::Demo(args) => commands::demo::run(args).await,
        Commands::Config(args) => commands::config::run(args),
    }
}

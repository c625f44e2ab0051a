//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod locate;
pub mod quakes;
pub mod suggest;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Dutch location search and earthquake feed client
#[derive(Parser)]
#[command(name = "locatiezoeker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest locations for a partial search term
    Suggest(suggest::SuggestArgs),

    /// Resolve a search term or suggestion id to an RD coordinate
    Locate(locate::LocateArgs),

    /// Fetch the KNMI induced-earthquake catalogue
    Quakes(quakes::QuakesArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest(args) => suggest::run(args).await,
        Commands::Locate(args) => locate::run(args).await,
        Commands::Quakes(args) => quakes::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

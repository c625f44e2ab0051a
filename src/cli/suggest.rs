//! Suggest command handler
//!
//! Prints ranked location suggestions for a partial search term.

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::locatieserver::LocatieserverClient;
use crate::search::LocationSearch;

/// Suggest command arguments
#[derive(Args)]
pub struct SuggestArgs {
    /// Partial search term (at least 2 characters for any results)
    pub term: String,

    /// Print raw JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Run the suggest command
pub async fn run(args: SuggestArgs) -> Result<()> {
    let config = Config::load()?;
    let search = LocationSearch::with_client(LocatieserverClient::from_config(&config));

    let suggestions = search.search_suggestions(&args.term).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No suggestions for '{}'", args.term);
        return Ok(());
    }

    for doc in &suggestions {
        println!("{:<12} {:<50} {}", doc.type_, doc.weergavenaam, doc.id);
    }

    Ok(())
}

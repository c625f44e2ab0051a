//! Locate command handler
//!
//! Resolves a search term (via the best suggestion) or a known suggestion id
//! to an RD coordinate.

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::locatieserver::LocatieserverClient;
use crate::search::LocationSearch;

/// Locate command arguments
#[derive(Args)]
pub struct LocateArgs {
    /// Search term, resolved through the top suggestion
    #[arg(conflicts_with = "id")]
    pub term: Option<String>,

    /// Suggestion id to look up directly
    #[arg(long)]
    pub id: Option<String>,

    /// Print the coordinate as WKT instead of "x y"
    #[arg(long)]
    pub wkt: bool,
}

/// Run the locate command
pub async fn run(args: LocateArgs) -> Result<()> {
    let config = Config::load()?;
    let search = LocationSearch::with_client(LocatieserverClient::from_config(&config));

    let (id, label) = match (args.term, args.id) {
        (_, Some(id)) => (id, None),
        (Some(term), None) => {
            let suggestions = search.search_suggestions(&term).await?;
            match suggestions.into_iter().next() {
                Some(doc) => (doc.id, Some(doc.weergavenaam)),
                None => {
                    eprintln!("No suggestions for '{}'", term);
                    std::process::exit(1);
                }
            }
        }
        (None, None) => {
            eprintln!("Provide a search term or --id");
            std::process::exit(1);
        }
    };

    match search.resolve_coordinate(&id).await? {
        Some(coord) => {
            if let Some(name) = label {
                println!("{}", name);
            }
            if args.wkt {
                println!("{}", coord.to_wkt());
            } else {
                println!("{} {}", coord.x, coord.y);
            }
        }
        None => {
            eprintln!("Location not found: {}", id);
            std::process::exit(1);
        }
    }

    Ok(())
}

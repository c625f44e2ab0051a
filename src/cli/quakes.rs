//! Quakes command handler
//!
//! Fetches the KNMI induced-earthquake catalogue.

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::knmi::KnmiClient;

/// Quakes command arguments
#[derive(Args)]
pub struct QuakesArgs {
    /// Output as an RD-projected GeoJSON feature collection
    #[arg(long)]
    pub geojson: bool,

    /// Only show events with at least this magnitude
    #[arg(long, short = 'm')]
    pub min_mag: Option<f64>,
}

/// Run the quakes command
pub async fn run(args: QuakesArgs) -> Result<()> {
    let config = Config::load()?;
    let client = KnmiClient::from_config(&config);

    if args.geojson {
        let mut collection = client.induced_events_geojson().await?;
        if let Some(min_mag) = args.min_mag {
            collection.features.retain(|f| f.properties.mag >= min_mag);
        }
        println!("{}", serde_json::to_string_pretty(&collection)?);
        return Ok(());
    }

    let mut events = client.induced_events().await?.events;
    if let Some(min_mag) = args.min_mag {
        events.retain(|e| e.mag >= min_mag);
    }

    println!("{} events", events.len());
    for event in &events {
        println!(
            "{} {}  M{:<4} {:>5.1} km  {}",
            event.date, event.time, event.mag, event.depth, event.place
        );
    }

    Ok(())
}

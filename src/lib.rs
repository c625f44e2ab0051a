//! locatiezoeker: Dutch location search and earthquake feed client
//!
//! A library and CLI tool around two Dutch public services:
//!
//! - PDOK Locatieserver: two-phase geocoding (suggest partial text, look up
//!   a candidate id to its RD coordinate)
//! - KNMI: the induced-earthquake catalogue, optionally as RD-projected
//!   GeoJSON for map overlays
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use locatiezoeker::search::LocationSearch;
//!
//! # async fn example() -> locatiezoeker::Result<()> {
//! let search = LocationSearch::new();
//!
//! // Ranked candidates for a partial term
//! let suggestions = search.search_suggestions("Lopper").await?;
//!
//! // Resolve the best candidate to an RD coordinate
//! if let Some(doc) = suggestions.first() {
//!     if let Some(coord) = search.resolve_coordinate(&doc.id).await? {
//!         println!("{} is at {} {}", doc.weergavenaam, coord.x, coord.y);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod knmi;
pub mod locatieserver;
pub mod search;
pub mod wkt;

// Re-export commonly used types
pub use config::Config;
pub use coord::{RdCoordinate, Wgs84Coordinate};
pub use error::{Error, Result};
pub use locatieserver::{LocatieserverClient, LookupDoc, SuggestDoc};
pub use search::LocationSearch;

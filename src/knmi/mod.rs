//! KNMI induced-earthquake feed
//!
//! The KNMI publishes the full catalogue of induced (gas-extraction) events
//! as one JSON document. This module fetches it, types it, and converts it
//! to an RD-projected GeoJSON feature collection for map overlays.

pub mod client;
pub mod types;

pub use client::KnmiClient;
pub use types::{FeatureCollection, InducedEvent, InducedEvents, PointFeature};

//! PDOK Locatieserver client
//!
//! Two-phase geocoding against the Dutch national Locatieserver:
//! `suggest` turns partial text into ranked candidates, `lookup` resolves a
//! candidate id to the full document including its RD centroid.

pub mod client;
pub mod types;

pub use client::LocatieserverClient;
pub use types::{DocsResponse, LocatieserverResult, LookupDoc, SuggestDoc};

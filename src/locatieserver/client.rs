//! HTTP client for the PDOK Locatieserver
//!
//! Free national service, no API key. Both operations are plain GETs with
//! JSON responses; failures propagate to the caller, there is no retry or
//! caching layer.

use reqwest::header::ACCEPT;
use tracing::debug;

use crate::config::Config;
use crate::constants::{api, search};
use crate::coord::RdCoordinate;
use crate::error::Result;
use crate::locatieserver::types::{LocatieserverResult, LookupDoc, SuggestDoc};
use crate::wkt;

const USER_AGENT: &str = "locatiezoeker/0.1.0";

/// PDOK Locatieserver client
#[derive(Debug, Clone)]
pub struct LocatieserverClient {
    client: reqwest::Client,
    suggest_url: String,
    lookup_url: String,
}

impl LocatieserverClient {
    /// Create a client against the production PDOK endpoints
    pub fn new() -> Self {
        Self::with_endpoints(api::PDOK_SUGGEST_URL, api::PDOK_LOOKUP_URL)
    }

    /// Create a client with the endpoints from a loaded config
    pub fn from_config(config: &Config) -> Self {
        Self::with_endpoints(&config.api.suggest_url, &config.api.lookup_url)
    }

    /// Create a client with explicit endpoints (also used to point at a mock
    /// server in tests)
    pub fn with_endpoints(suggest_url: impl Into<String>, lookup_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            suggest_url: suggest_url.into(),
            lookup_url: lookup_url.into(),
        }
    }

    /// Fetch ranked suggestions for a partial search term
    ///
    /// Terms shorter than two characters return an empty list without
    /// touching the network, so early keystrokes never flood the service.
    /// Settlement matches are boosted and at most five rows are requested.
    pub async fn suggest(&self, term: &str) -> Result<Vec<SuggestDoc>> {
        if term.chars().count() < search::MIN_QUERY_CHARS {
            return Ok(Vec::new());
        }

        debug!(term, "locatieserver suggest");

        let response = self
            .client
            .get(&self.suggest_url)
            .query(&[("q", term), ("bq", search::SETTLEMENT_BOOST)])
            .query(&[("rows", search::SUGGEST_ROWS)])
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        let result: LocatieserverResult<SuggestDoc> = response.json().await?;
        Ok(result.response.docs)
    }

    /// Resolve a suggestion id to its RD centroid
    ///
    /// Returns `None` when the service reports no match for the id. A
    /// malformed `centroide_rd` in the first document surfaces as
    /// [`crate::Error::InvalidWkt`].
    pub async fn lookup(&self, id: &str) -> Result<Option<RdCoordinate>> {
        debug!(id, "locatieserver lookup");

        let response = self
            .client
            .get(&self.lookup_url)
            .query(&[("id", id)])
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        let result: LocatieserverResult<LookupDoc> = response.json().await?;
        if result.response.num_found == 0 {
            return Ok(None);
        }

        match result.response.docs.into_iter().next() {
            Some(doc) => Ok(Some(wkt::coordinate_from_wkt(&doc.centroide_rd)?)),
            None => Ok(None),
        }
    }
}

impl Default for LocatieserverClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Port 9 (discard): any request issued against it would error, so a
    // clean empty result proves no call was made.
    fn unreachable_client() -> LocatieserverClient {
        LocatieserverClient::with_endpoints("http://127.0.0.1:9/suggest", "http://127.0.0.1:9/lookup")
    }

    #[tokio::test]
    async fn test_suggest_short_circuits_below_two_chars() {
        let client = unreachable_client();
        assert!(client.suggest("").await.unwrap().is_empty());
        assert!(client.suggest("a").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_suggest_counts_chars_not_bytes() {
        let client = unreachable_client();
        // One multi-byte char is still one char
        assert!(client.suggest("é").await.unwrap().is_empty());
    }

    #[test]
    fn test_client_creation() {
        let client = LocatieserverClient::new();
        assert!(format!("{:?}", client).contains("LocatieserverClient"));
    }
}

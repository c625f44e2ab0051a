//! HTTP client for the KNMI induced-earthquake feed

use reqwest::header::ACCEPT;
use tracing::debug;

use crate::config::Config;
use crate::constants::api;
use crate::error::Result;
use crate::knmi::types::{FeatureCollection, InducedEvents};

const USER_AGENT: &str = "locatiezoeker/0.1.0";

/// KNMI catalogue client
#[derive(Debug, Clone)]
pub struct KnmiClient {
    client: reqwest::Client,
    feed_url: String,
}

impl KnmiClient {
    /// Create a client against the production KNMI feed
    pub fn new() -> Self {
        Self::with_feed_url(api::KNMI_INDUCED_URL)
    }

    /// Create a client with the feed URL from a loaded config
    pub fn from_config(config: &Config) -> Self {
        Self::with_feed_url(&config.api.knmi_url)
    }

    /// Create a client with an explicit feed URL (mock server in tests)
    pub fn with_feed_url(feed_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            feed_url: feed_url.into(),
        }
    }

    /// Fetch the full induced-event catalogue
    pub async fn induced_events(&self) -> Result<InducedEvents> {
        debug!(url = %self.feed_url, "fetching KNMI induced events");

        let response = self
            .client
            .get(&self.feed_url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Fetch the catalogue as an RD-projected GeoJSON feature collection
    pub async fn induced_events_geojson(&self) -> Result<FeatureCollection> {
        Ok(self.induced_events().await?.into())
    }
}

impl Default for KnmiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = KnmiClient::new();
        assert!(format!("{:?}", client).contains("KnmiClient"));
    }
}

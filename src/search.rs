//! Location search facade
//!
//! The two operations a search box needs: incremental suggestions while the
//! user types, and coordinate resolution once they pick one. The facade
//! returns data only; recentring the map (or whatever else happens with the
//! coordinate) is the caller's business.

use crate::coord::RdCoordinate;
use crate::error::Result;
use crate::locatieserver::{LocatieserverClient, SuggestDoc};

/// Stateless search facade over the Locatieserver
///
/// Calls are independent and idempotent; overlapping suggest calls from
/// rapid input may resolve out of order, debouncing belongs upstream.
#[derive(Debug, Clone, Default)]
pub struct LocationSearch {
    client: LocatieserverClient,
}

impl LocationSearch {
    /// Create a facade against the production PDOK endpoints
    pub fn new() -> Self {
        Self::with_client(LocatieserverClient::new())
    }

    /// Create a facade over an existing client
    pub fn with_client(client: LocatieserverClient) -> Self {
        Self { client }
    }

    /// Suggestions for a partial search term (empty for terms under two chars)
    pub async fn search_suggestions(&self, term: &str) -> Result<Vec<SuggestDoc>> {
        self.client.suggest(term).await
    }

    /// RD coordinate for a suggestion id, `None` when the id matches nothing
    pub async fn resolve_coordinate(&self, suggestion_id: &str) -> Result<Option<RdCoordinate>> {
        self.client.lookup(suggestion_id).await
    }
}

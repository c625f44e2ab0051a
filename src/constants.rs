//! Centralized constants for the locatiezoeker crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// External API endpoints
pub mod api {
    /// PDOK Locatieserver suggest endpoint (ranked candidates from partial text)
    pub const PDOK_SUGGEST_URL: &str =
        "https://api.pdok.nl/bzk/locatieserver/search/v3_1/suggest";

    /// PDOK Locatieserver lookup endpoint (candidate id to full document)
    pub const PDOK_LOOKUP_URL: &str =
        "https://api.pdok.nl/bzk/locatieserver/search/v3_1/lookup";

    /// KNMI induced-earthquake catalogue (public JSON feed, no key required)
    pub const KNMI_INDUCED_URL: &str =
        "https://cdn.knmi.nl/knmi/map/page/seismologie/all_induced.json";
}

/// Search tuning for the suggest query
pub mod search {
    /// Queries shorter than this return no results without a network call
    pub const MIN_QUERY_CHARS: usize = 2;

    /// Maximum number of suggestions requested per query
    pub const SUGGEST_ROWS: u32 = 5;

    /// Solr boost query: rank settlement (woonplaats) matches above streets
    /// and addresses
    pub const SETTLEMENT_BOOST: &str = "type:woonplaats^2";
}

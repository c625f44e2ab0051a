//! Typed Locatieserver responses
//!
//! The service wraps both suggest and lookup results in the same Solr-style
//! envelope; only the document type inside `docs` differs. Field names are
//! the Dutch wire names (`weergavenaam` is the display name).

use serde::{Deserialize, Serialize};

/// Top-level Locatieserver response envelope
///
/// `highlighting` and `spellcheck` are carried along untyped; nothing here
/// consumes them.
#[derive(Debug, Clone, Deserialize)]
pub struct LocatieserverResult<D> {
    pub response: DocsResponse<D>,

    #[serde(default)]
    pub highlighting: serde_json::Value,

    #[serde(default)]
    pub spellcheck: serde_json::Value,
}

/// The `response` object: hit count plus the documents themselves
#[derive(Debug, Clone, Deserialize)]
pub struct DocsResponse<D> {
    #[serde(rename = "numFound")]
    pub num_found: u64,

    #[serde(default)]
    pub start: u64,

    #[serde(rename = "maxScore", default)]
    pub max_score: Option<f64>,

    #[serde(rename = "numFoundExact", default)]
    pub num_found_exact: bool,

    pub docs: Vec<D>,
}

/// A suggest hit: enough to render a dropdown row and fetch the rest later
///
/// `id` is the only key the lookup endpoint accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestDoc {
    /// Result kind: "woonplaats", "weg", "adres", ...
    #[serde(rename = "type")]
    pub type_: String,

    /// Display name shown to the user
    pub weergavenaam: String,

    /// Stable document id, key for lookup
    pub id: String,

    /// Solr relevance score
    pub score: f64,
}

/// A lookup hit: the full document behind a suggestion
///
/// Everything beyond the centroids is metadata the service may omit
/// depending on the document type, hence the `Option`s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupDoc {
    #[serde(rename = "type")]
    pub type_: String,

    pub weergavenaam: String,

    pub id: String,

    /// Centroid as WKT in the RD projection (EPSG:28992)
    pub centroide_rd: String,

    /// Centroid as WKT in WGS84 lat/lon
    #[serde(default)]
    pub centroide_ll: Option<String>,

    #[serde(default)]
    pub woonplaatsnaam: Option<String>,

    #[serde(default)]
    pub gemeentenaam: Option<String>,

    #[serde(default)]
    pub provincienaam: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_envelope_decodes() {
        let body = r#"{
            "response": {
                "numFound": 2,
                "start": 0,
                "maxScore": 12.9,
                "numFoundExact": true,
                "docs": [
                    {"type": "woonplaats", "weergavenaam": "Loppersum, Gemeente Eemsdelta", "id": "wpl-1234", "score": 12.9},
                    {"type": "weg", "weergavenaam": "Loppersumerweg", "id": "weg-5678", "score": 7.1}
                ]
            },
            "highlighting": {"wpl-1234": {"suggest": ["<b>Lopper</b>sum"]}},
            "spellcheck": {"suggestions": [], "collations": []}
        }"#;

        let result: LocatieserverResult<SuggestDoc> = serde_json::from_str(body).unwrap();
        assert_eq!(result.response.num_found, 2);
        assert!(result.response.num_found_exact);
        assert_eq!(result.response.docs.len(), 2);
        assert_eq!(result.response.docs[0].type_, "woonplaats");
        assert_eq!(result.response.docs[0].id, "wpl-1234");
    }

    #[test]
    fn test_lookup_doc_decodes_without_optional_metadata() {
        let body = r#"{
            "response": {
                "numFound": 1,
                "start": 0,
                "docs": [
                    {
                        "type": "woonplaats",
                        "weergavenaam": "Loppersum, Gemeente Eemsdelta",
                        "id": "wpl-1234",
                        "centroide_rd": "POINT(244032.255 594518.533)"
                    }
                ]
            }
        }"#;

        let result: LocatieserverResult<LookupDoc> = serde_json::from_str(body).unwrap();
        let doc = &result.response.docs[0];
        assert_eq!(doc.centroide_rd, "POINT(244032.255 594518.533)");
        assert!(doc.centroide_ll.is_none());
        assert!(doc.gemeentenaam.is_none());
    }
}

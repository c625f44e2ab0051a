//! Error types for locatiezoeker

use thiserror::Error;

/// Main error type for locatiezoeker operations
#[derive(Error, Debug)]
pub enum Error {
    /// WKT string did not contain exactly two RD coordinate tokens
    #[error("Invalid WKT string: {0}")]
    InvalidWkt(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network failure, non-2xx status, or undecodable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for locatiezoeker operations
pub type Result<T> = std::result::Result<T, Error>;

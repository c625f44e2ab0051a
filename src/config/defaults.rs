//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api;

/// Default suggest endpoint
pub const DEFAULT_SUGGEST_URL: &str = api::PDOK_SUGGEST_URL;

/// Default lookup endpoint
pub const DEFAULT_LOOKUP_URL: &str = api::PDOK_LOOKUP_URL;

/// Default KNMI feed URL
pub const DEFAULT_KNMI_URL: &str = api::KNMI_INDUCED_URL;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "locatiezoeker";

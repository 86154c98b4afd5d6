//! Wiki-Glean: a keyword-to-article harvester
//!
//! This crate resolves free-text keywords against a Wikipedia language
//! edition, fetches each matched article's plain-text body and section
//! outline, and appends the results to an NDJSON dataset one record per line.

pub mod config;
pub mod input;
pub mod marker;
pub mod output;
pub mod pipeline;
pub mod state;
pub mod wiki;

use thiserror::Error;

/// Main error type for Wiki-Glean operations
#[derive(Debug, Error)]
pub enum GleanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Search failed for '{query}': {message}")]
    SearchFailed { query: String, message: String },

    #[error("Extract failed for '{title}': {message}")]
    ExtractFailed { title: String, message: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Keyword input error: {0}")]
    Input(#[from] csv::Error),

    #[error("Keyword column '{0}' not found in input table")]
    MissingColumn(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::QueryState,
        to: state::QueryState,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Wiki-Glean operations
pub type Result<T> = std::result::Result<T, GleanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use pipeline::{canonical_url, ArticleRecord};
pub use state::QueryState;

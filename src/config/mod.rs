//! Configuration module for Wiki-Glean
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use wiki_glean::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Fetching from the {}.wikipedia.org edition", config.wikipedia.language);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, InputConfig, OutputConfig, UserAgentConfig, WikipediaConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

//! HTTP client wrapper for the MediaWiki APIs
//!
//! One persistent `reqwest::Client` is built for the whole run, carrying a
//! descriptive User-Agent (required by the Wikimedia User-Agent policy) and
//! a per-request timeout. Endpoints derive from the configured language
//! edition, or from an explicit base-url override for self-hosted wikis.

use crate::config::{Config, UserAgentConfig};
use crate::wiki::retry::RetryPolicy;
use crate::GleanError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Resolved API endpoints for one language edition (or an override host)
#[derive(Debug, Clone)]
pub struct WikiEndpoints {
    /// MediaWiki Action API (`/w/api.php`)
    pub action_api: Url,

    /// Core REST search endpoint (`/w/rest.php/v1/search/page`)
    pub rest_search: Url,
}

impl WikiEndpoints {
    /// Derives endpoints from the configuration
    ///
    /// Without a base-url override this yields the public
    /// `https://{language}.wikipedia.org` host.
    pub fn from_config(config: &Config) -> Result<Self, GleanError> {
        let base = match &config.wikipedia.base_url {
            Some(base_url) => Url::parse(base_url)?,
            None => Url::parse(&format!(
                "https://{}.wikipedia.org",
                config.wikipedia.language
            ))?,
        };

        Ok(Self {
            action_api: base.join("/w/api.php")?,
            rest_search: base.join("/w/rest.php/v1/search/page")?,
        })
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Per-request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    // Format: Name/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Client wrapper bundling the HTTP connection, endpoints, and retry policy
///
/// All three fetch stages (title resolution, extract, outline) go through
/// this one client so the underlying connection is reused across the run.
#[derive(Debug, Clone)]
pub struct WikiClient {
    pub(crate) http: Client,
    pub(crate) endpoints: WikiEndpoints,
    pub(crate) retry: RetryPolicy,
}

impl WikiClient {
    /// Creates a wiki client from the configuration
    pub fn new(config: &Config) -> Result<Self, GleanError> {
        let http = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.wikipedia.request_timeout),
        )?;
        let endpoints = WikiEndpoints::from_config(config)?;
        let retry = RetryPolicy::from_config(&config.wikipedia);

        Ok(Self {
            http,
            endpoints,
            retry,
        })
    }
}

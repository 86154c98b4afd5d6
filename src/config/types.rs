use serde::Deserialize;

/// Main configuration structure for Wiki-Glean
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub wikipedia: WikipediaConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Wikipedia API and pacing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WikipediaConfig {
    /// Language edition code (e.g., "en", "de")
    pub language: String,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,

    /// Unconditional pause between emitted records (milliseconds)
    #[serde(rename = "delay-between-requests")]
    pub delay_between_requests: u64,

    /// Attempt ceiling for every fetch stage
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Linear backoff base (milliseconds); sleep is base * attempt number
    #[serde(rename = "retry-base-delay")]
    pub retry_base_delay: u64,

    /// Optional API host override for self-hosted MediaWiki instances.
    /// Canonical article URLs always use the public language edition host.
    #[serde(rename = "base-url", default)]
    pub base_url: Option<String>,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the fetcher
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the fetcher
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the fetcher
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for fetcher-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Keyword input configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path to the CSV keyword table
    #[serde(rename = "keywords-path")]
    pub keywords_path: String,

    /// Header name of the consumed column
    #[serde(rename = "keyword-column", default = "default_keyword_column")]
    pub keyword_column: String,
}

fn default_keyword_column() -> String {
    "Keyword".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the NDJSON dataset
    #[serde(rename = "dataset-dir")]
    pub dataset_dir: String,

    /// Path to the run marker file
    #[serde(rename = "marker-path")]
    pub marker_path: String,

    /// Whether the first run (no marker yet) fetches immediately
    #[serde(rename = "auto-fetch-on-first-run", default = "default_auto_fetch")]
    pub auto_fetch_on_first_run: bool,
}

fn default_auto_fetch() -> bool {
    true
}

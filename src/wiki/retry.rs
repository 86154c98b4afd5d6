//! Bounded retry with linear backoff
//!
//! Every fetch stage shares the same attempt ceiling and backoff shape:
//! the sleep before attempt N+1 is `base_delay * N`.

use crate::config::WikipediaConfig;
use std::time::Duration;

/// Retry policy shared by the resolver, extract, and outline fetchers
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts per call (>= 1)
    pub max_attempts: u32,

    /// Base delay for the linear backoff
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Builds a retry policy from the Wikipedia configuration section
    pub fn from_config(config: &WikipediaConfig) -> Self {
        Self {
            max_attempts: config.max_retries,
            base_delay: Duration::from_millis(config.retry_base_delay),
        }
    }

    /// Returns the backoff delay to sleep after the given attempt (1-based)
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

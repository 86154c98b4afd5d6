//! Wikipedia API access
//!
//! This module contains the HTTP-facing half of the pipeline:
//! - Persistent HTTP client with a descriptive User-Agent and timeout
//! - Two-strategy title resolution with fallback
//! - Plain-text extract fetching with redirect resolution
//! - Section outline fetching with graceful degradation
//! - Shared bounded-retry policy with linear backoff

mod client;
mod extract;
mod outline;
mod resolver;
mod retry;

pub use client::{build_http_client, WikiClient, WikiEndpoints};
pub use extract::Extract;
pub use retry::RetryPolicy;

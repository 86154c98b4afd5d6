//! Title resolution via search
//!
//! Two search strategies are tried in order: the MediaWiki Action API search
//! first, then the Core REST search as a fallback. Each strategy requests
//! exactly one best match and independently retries transient failures up to
//! the configured ceiling. A search that succeeds with zero hits is a valid
//! "no match" outcome, not an error.

use crate::wiki::client::WikiClient;
use crate::{GleanError, Result};
use serde::Deserialize;

/// Action API search response envelope (`formatversion=2`)
#[derive(Debug, Deserialize)]
struct ActionSearchResponse {
    #[serde(default)]
    query: Option<ActionSearchBody>,
}

#[derive(Debug, Deserialize)]
struct ActionSearchBody {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

/// Core REST search response envelope
#[derive(Debug, Deserialize)]
struct RestSearchResponse {
    #[serde(default)]
    pages: Vec<RestSearchPage>,
}

#[derive(Debug, Deserialize)]
struct RestSearchPage {
    title: String,
}

impl WikiClient {
    /// Resolves a free-text query to a canonical article title
    ///
    /// Returns the primary strategy's top hit when it has one; otherwise the
    /// secondary strategy's result, which may itself be `None`. Retry
    /// exhaustion in either strategy propagates to the caller — per-query
    /// degradation is the orchestrator's job, not the resolver's.
    pub async fn resolve_title(&self, query: &str) -> Result<Option<String>> {
        if let Some(title) = self.search_action(query).await? {
            return Ok(Some(title));
        }
        self.search_rest(query).await
    }

    /// Primary strategy: Action API `list=search`, bounded retry
    async fn search_action(&self, query: &str) -> Result<Option<String>> {
        let mut last_error = String::new();

        for attempt in 1..=self.retry.max_attempts {
            match self.search_action_once(query).await {
                Ok(hit) => return Ok(hit),
                Err(e) => {
                    tracing::warn!(
                        "Action search attempt {}/{} for '{}' failed: {}",
                        attempt,
                        self.retry.max_attempts,
                        query,
                        e
                    );
                    last_error = e.to_string();
                    if attempt < self.retry.max_attempts {
                        tokio::time::sleep(self.retry.backoff(attempt)).await;
                    }
                }
            }
        }

        Err(GleanError::SearchFailed {
            query: query.to_string(),
            message: format!("action search: {}", last_error),
        })
    }

    async fn search_action_once(&self, query: &str) -> Result<Option<String>> {
        let response = self
            .http
            .get(self.endpoints.action_api.clone())
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", "1"),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: ActionSearchResponse = response.json().await?;
        let top_hit = data
            .query
            .map(|body| body.search)
            .unwrap_or_default()
            .into_iter()
            .next();

        Ok(top_hit.map(|hit| hit.title))
    }

    /// Secondary strategy: Core REST `search/page`, bounded retry
    async fn search_rest(&self, query: &str) -> Result<Option<String>> {
        let mut last_error = String::new();

        for attempt in 1..=self.retry.max_attempts {
            match self.search_rest_once(query).await {
                Ok(hit) => return Ok(hit),
                Err(e) => {
                    tracing::warn!(
                        "REST search attempt {}/{} for '{}' failed: {}",
                        attempt,
                        self.retry.max_attempts,
                        query,
                        e
                    );
                    last_error = e.to_string();
                    if attempt < self.retry.max_attempts {
                        tokio::time::sleep(self.retry.backoff(attempt)).await;
                    }
                }
            }
        }

        Err(GleanError::SearchFailed {
            query: query.to_string(),
            message: format!("REST search: {}", last_error),
        })
    }

    async fn search_rest_once(&self, query: &str) -> Result<Option<String>> {
        let response = self
            .http
            .get(self.endpoints.rest_search.clone())
            .query(&[("q", query), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?;

        let data: RestSearchResponse = response.json().await?;
        Ok(data.pages.into_iter().next().map(|page| page.title))
    }
}

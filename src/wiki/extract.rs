//! Plain-text article extract fetching
//!
//! Uses the Action API `prop=extracts` with `explaintext` and server-side
//! redirect resolution. A missing article is a valid empty outcome; only
//! transport/parse failures are retried and, on exhaustion, surfaced.

use crate::wiki::client::WikiClient;
use crate::{GleanError, Result};
use serde::Deserialize;

/// A fetched plain-text extract with its server-normalized identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extract {
    /// Plain-text article body; empty when the article has no content
    pub text: String,

    /// Title after server-side normalization and redirect resolution
    pub normalized_title: String,

    /// Page id, absent when the article does not exist
    pub page_id: Option<u64>,
}

impl Extract {
    /// The empty extract used when an article is missing entirely
    pub fn missing(title: &str) -> Self {
        Self {
            text: String::new(),
            normalized_title: title.to_string(),
            page_id: None,
        }
    }
}

/// Action API extract response envelope (`formatversion=2`)
#[derive(Debug, Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    query: Option<ExtractBody>,
}

#[derive(Debug, Deserialize)]
struct ExtractBody {
    #[serde(default)]
    pages: Vec<ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    #[serde(default)]
    pageid: Option<u64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    extract: Option<String>,
}

impl WikiClient {
    /// Fetches the plain-text extract for a title, following redirects
    ///
    /// Retries transient failures up to the configured ceiling with linear
    /// backoff; exhaustion returns `GleanError::ExtractFailed`. An article
    /// the server does not know yields `Extract::missing`, not an error.
    pub async fn fetch_extract(&self, title: &str) -> Result<Extract> {
        let mut last_error = String::new();

        for attempt in 1..=self.retry.max_attempts {
            match self.fetch_extract_once(title).await {
                Ok(extract) => return Ok(extract),
                Err(e) => {
                    tracing::warn!(
                        "Extract attempt {}/{} for '{}' failed: {}",
                        attempt,
                        self.retry.max_attempts,
                        title,
                        e
                    );
                    last_error = e.to_string();
                    if attempt < self.retry.max_attempts {
                        tokio::time::sleep(self.retry.backoff(attempt)).await;
                    }
                }
            }
        }

        Err(GleanError::ExtractFailed {
            title: title.to_string(),
            message: last_error,
        })
    }

    async fn fetch_extract_once(&self, title: &str) -> Result<Extract> {
        let response = self
            .http
            .get(self.endpoints.action_api.clone())
            .query(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("format", "json"),
                ("formatversion", "2"),
                ("titles", title),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: ExtractResponse = response.json().await?;
        let pages = data.query.map(|body| body.pages).unwrap_or_default();

        let page = match pages.into_iter().next() {
            Some(page) => page,
            None => return Ok(Extract::missing(title)),
        };

        Ok(Extract {
            text: page.extract.unwrap_or_default(),
            normalized_title: page.title.unwrap_or_else(|| title.to_string()),
            page_id: page.pageid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_response_full_page() {
        let json = r#"{"query": {"pages": [
            {"pageid": 736, "ns": 0, "title": "Albert Einstein", "extract": "Albert Einstein was..."}
        ]}}"#;
        let parsed: ExtractResponse = serde_json::from_str(json).unwrap();
        let page = parsed.query.unwrap().pages.into_iter().next().unwrap();

        assert_eq!(page.pageid, Some(736));
        assert_eq!(page.title.as_deref(), Some("Albert Einstein"));
        assert_eq!(page.extract.as_deref(), Some("Albert Einstein was..."));
    }

    #[test]
    fn test_extract_response_missing_page() {
        // formatversion=2 marks unknown titles with "missing" and omits
        // pageid and extract
        let json = r#"{"query": {"pages": [
            {"ns": 0, "title": "Zzzznonexistent", "missing": true}
        ]}}"#;
        let parsed: ExtractResponse = serde_json::from_str(json).unwrap();
        let page = parsed.query.unwrap().pages.into_iter().next().unwrap();

        assert_eq!(page.pageid, None);
        assert_eq!(page.extract, None);
        assert_eq!(page.title.as_deref(), Some("Zzzznonexistent"));
    }

    #[test]
    fn test_extract_response_no_pages() {
        let json = r#"{"query": {"pages": []}}"#;
        let parsed: ExtractResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.query.unwrap().pages.is_empty());
    }

    #[test]
    fn test_extract_missing_constructor() {
        let extract = Extract::missing("Some Query");
        assert_eq!(extract.text, "");
        assert_eq!(extract.normalized_title, "Some Query");
        assert_eq!(extract.page_id, None);
    }
}

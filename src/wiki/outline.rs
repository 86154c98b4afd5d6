//! Section outline (table of contents) fetching
//!
//! Uses the Action API `action=parse&prop=sections`. The outline is treated
//! as non-essential: retry exhaustion degrades to an empty list instead of
//! surfacing an error, unlike the resolver and extract stages.

use crate::wiki::client::WikiClient;
use crate::Result;
use serde::Deserialize;

/// Action API parse response envelope
#[derive(Debug, Deserialize)]
struct ParseResponse {
    /// Absent on error payloads (e.g., the page does not exist)
    #[serde(default)]
    parse: Option<ParseBody>,
}

#[derive(Debug, Deserialize)]
struct ParseBody {
    #[serde(default)]
    sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
struct Section {
    #[serde(default)]
    line: Option<String>,
    #[serde(default)]
    anchor: Option<String>,
}

/// Extracts ordered, non-empty section names from a parse body
///
/// Each section's display name (`line`) is preferred, falling back to its
/// anchor; names are trimmed and empties are dropped. Document order is kept.
fn section_names(sections: Vec<Section>) -> Vec<String> {
    sections
        .into_iter()
        .filter_map(|section| {
            let name = section.line.or(section.anchor).unwrap_or_default();
            let name = name.trim();
            if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            }
        })
        .collect()
}

impl WikiClient {
    /// Fetches the ordered section headings for a (normalized) title
    ///
    /// Retries with the shared policy but never raises: exhaustion returns
    /// an empty outline so the record can still be written.
    pub async fn fetch_outline(&self, title: &str) -> Vec<String> {
        for attempt in 1..=self.retry.max_attempts {
            match self.fetch_outline_once(title).await {
                Ok(outline) => return outline,
                Err(e) => {
                    tracing::warn!(
                        "Outline attempt {}/{} for '{}' failed: {}",
                        attempt,
                        self.retry.max_attempts,
                        title,
                        e
                    );
                    if attempt < self.retry.max_attempts {
                        tokio::time::sleep(self.retry.backoff(attempt)).await;
                    }
                }
            }
        }

        tracing::warn!(
            "Outline unavailable for '{}', continuing with an empty table of contents",
            title
        );
        Vec::new()
    }

    async fn fetch_outline_once(&self, title: &str) -> Result<Vec<String>> {
        let response = self
            .http
            .get(self.endpoints.action_api.clone())
            .query(&[
                ("action", "parse"),
                ("page", title),
                ("prop", "sections"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: ParseResponse = response.json().await?;

        // A successful call whose payload is an API error object (missing
        // page) carries no "parse" key; that is an empty outline, not a
        // retryable failure.
        Ok(section_names(
            data.parse.map(|body| body.sections).unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(line: Option<&str>, anchor: Option<&str>) -> Section {
        Section {
            line: line.map(|s| s.to_string()),
            anchor: anchor.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_section_names_prefers_line() {
        let names = section_names(vec![section(Some("Early life"), Some("Early_life"))]);
        assert_eq!(names, vec!["Early life"]);
    }

    #[test]
    fn test_section_names_falls_back_to_anchor() {
        let names = section_names(vec![section(None, Some("Career"))]);
        assert_eq!(names, vec!["Career"]);
    }

    #[test]
    fn test_section_names_trims_and_drops_empties() {
        let names = section_names(vec![
            section(Some("  Early life  "), None),
            section(Some(""), None),
            section(Some("   "), Some("ignored")),
            section(None, None),
            section(Some("Career"), None),
        ]);
        assert_eq!(names, vec!["Early life", "Career"]);
    }

    #[test]
    fn test_section_names_keeps_document_order() {
        let names = section_names(vec![
            section(Some("Early life"), None),
            section(Some("Career"), None),
            section(Some("Legacy"), None),
        ]);
        assert_eq!(names, vec!["Early life", "Career", "Legacy"]);
    }

    #[test]
    fn test_parse_response_error_payload() {
        // action=parse for a missing page returns an error object
        let json = r#"{"error": {"code": "missingtitle", "info": "The page you specified doesn't exist."}}"#;
        let parsed: ParseResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.parse.is_none());
    }

    #[test]
    fn test_parse_response_with_sections() {
        let json = r#"{"parse": {"title": "Albert Einstein", "sections": [
            {"toclevel": 1, "line": "Early life", "anchor": "Early_life"},
            {"toclevel": 1, "line": "Career", "anchor": "Career"}
        ]}}"#;
        let parsed: ParseResponse = serde_json::from_str(json).unwrap();
        let names = section_names(parsed.parse.unwrap().sections);
        assert_eq!(names, vec!["Early life", "Career"]);
    }
}

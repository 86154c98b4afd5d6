//! Output record and canonical URL derivation

use crate::{GleanError, Result};
use serde::Serialize;
use url::Url;

/// One NDJSON output line: an article resolved from a keyword query
///
/// Field order is fixed and part of the output format. `raw_text` and
/// `table_of_contents` may be empty without invalidating the record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArticleRecord {
    /// Canonical public article URL, derived from language edition and title
    pub url: String,

    /// Server-normalized article title (or the raw query on fallback)
    pub title: String,

    /// Ordered section headings; empty when unavailable
    pub table_of_contents: Vec<String>,

    /// Plain-text article body; empty when unavailable
    pub raw_text: String,
}

/// Derives the canonical public article URL for a language edition and title
///
/// Spaces become underscores and each path segment is percent-encoded, while
/// slashes inside the title keep acting as segment separators (subpages).
/// The result depends only on `(language, title)`; an API base-url override
/// never changes it.
///
/// # Example
///
/// ```
/// use wiki_glean::canonical_url;
///
/// let url = canonical_url("en", "Albert Einstein").unwrap();
/// assert_eq!(url.as_str(), "https://en.wikipedia.org/wiki/Albert_Einstein");
/// ```
pub fn canonical_url(language: &str, title: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("https://{}.wikipedia.org/wiki/", language))?;

    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            GleanError::InvalidUrl(format!(
                "cannot build article URL for language '{}'",
                language
            ))
        })?;
        segments.pop_if_empty();
        for part in title.replace(' ', "_").split('/') {
            segments.push(part);
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_url_spaces_to_underscores() {
        let url = canonical_url("en", "Albert Einstein").unwrap();
        assert_eq!(url.as_str(), "https://en.wikipedia.org/wiki/Albert_Einstein");
    }

    #[test]
    fn test_canonical_url_language_edition() {
        let url = canonical_url("de", "Berlin").unwrap();
        assert_eq!(url.as_str(), "https://de.wikipedia.org/wiki/Berlin");
    }

    #[test]
    fn test_canonical_url_percent_encodes_non_ascii() {
        let url = canonical_url("en", "Kurt Gödel").unwrap();
        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/wiki/Kurt_G%C3%B6del"
        );
    }

    #[test]
    fn test_canonical_url_encodes_reserved_characters() {
        let url = canonical_url("en", "What? A title").unwrap();
        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/wiki/What%3F_A_title"
        );
    }

    #[test]
    fn test_canonical_url_keeps_subpage_slashes() {
        let url = canonical_url("en", "AC/DC").unwrap();
        assert_eq!(url.as_str(), "https://en.wikipedia.org/wiki/AC/DC");
    }

    #[test]
    fn test_canonical_url_is_deterministic() {
        let first = canonical_url("en", "Ada Lovelace").unwrap();
        let second = canonical_url("en", "Ada Lovelace").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_record_serializes_with_fixed_field_order() {
        let record = ArticleRecord {
            url: "https://en.wikipedia.org/wiki/Albert_Einstein".to_string(),
            title: "Albert Einstein".to_string(),
            table_of_contents: vec!["Early life".to_string(), "Career".to_string()],
            raw_text: "Albert Einstein was...".to_string(),
        };

        let line = serde_json::to_string(&record).unwrap();
        assert_eq!(
            line,
            r#"{"url":"https://en.wikipedia.org/wiki/Albert_Einstein","title":"Albert Einstein","table_of_contents":["Early life","Career"],"raw_text":"Albert Einstein was..."}"#
        );
    }

    #[test]
    fn test_record_preserves_non_ascii_unescaped() {
        let record = ArticleRecord {
            url: "https://en.wikipedia.org/wiki/Kurt_G%C3%B6del".to_string(),
            title: "Kurt Gödel".to_string(),
            table_of_contents: vec![],
            raw_text: "Kurt Gödel was a logician…".to_string(),
        };

        let line = serde_json::to_string(&record).unwrap();
        assert!(line.contains("Kurt Gödel"));
        assert!(line.contains("logician…"));
        assert!(!line.contains("\\u"));
    }
}

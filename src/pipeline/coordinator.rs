//! Pipeline coordinator - sequential per-keyword orchestration
//!
//! The coordinator drives one keyword at a time, never concurrently:
//! resolve title → fetch extract → fetch outline → write record, with a
//! fixed pause between records. Failures in one query never abort the run;
//! each stage degrades to its documented fallback instead.

use crate::config::Config;
use crate::output::NdjsonWriter;
use crate::pipeline::record::{canonical_url, ArticleRecord};
use crate::state::QueryState;
use crate::wiki::{Extract, WikiClient};
use crate::Result;
use std::time::Duration;

/// Per-stage outcome tag for one processed query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// The stage completed normally (including valid empty results)
    Ok,

    /// The stage exhausted its retries and the documented fallback was used
    Degraded,
}

/// Explicit per-query result, kept for progress reporting
///
/// Carries success/degraded tags per stage rather than letting failures
/// cross component boundaries silently.
#[derive(Debug, Clone)]
pub struct QueryReport {
    /// The raw input keyword
    pub query: String,

    /// The title the record was written under
    pub title: String,

    /// Title resolution outcome
    pub resolution: StageOutcome,

    /// Extract fetch outcome
    pub content: StageOutcome,

    /// Number of outline sections captured
    pub outline_sections: usize,
}

/// Totals for one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records appended to the dataset
    pub records_written: usize,

    /// Records written with at least one degraded stage
    pub degraded: usize,

    /// Blank/whitespace-only keywords skipped without a record
    pub skipped: usize,
}

/// Main pipeline coordinator structure
pub struct Coordinator {
    config: Config,
    client: WikiClient,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The validated run configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(GleanError)` - Failed to build the HTTP client or endpoints
    pub fn new(config: Config) -> Result<Self> {
        let client = WikiClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Processes every keyword in input order, appending one record each
    ///
    /// Blank/whitespace-only keywords are skipped without a record and
    /// without consuming a slot in the delay schedule. Only an unwritable
    /// output artifact is fatal; everything else degrades per query.
    pub async fn run(&self, keywords: &[String], writer: &mut NdjsonWriter) -> Result<RunSummary> {
        let delay = Duration::from_millis(self.config.wikipedia.delay_between_requests);
        let mut summary = RunSummary::default();

        for (index, keyword) in keywords.iter().enumerate() {
            let query = keyword.trim();
            if query.is_empty() {
                tracing::debug!("[{}] Skipping blank keyword", index);
                summary.skipped += 1;
                continue;
            }

            tracing::info!(
                "[{}] Resolving '{}' on the {} edition",
                index,
                query,
                self.config.wikipedia.language
            );

            let (record, report) = self.process_query(index, query).await?;

            writer.append_record(&record)?;

            tracing::info!(
                "[{}] Wrote record for '{}' (state={}, chars={}, sections={})",
                index,
                report.title,
                QueryState::RecordWritten,
                record.raw_text.len(),
                report.outline_sections
            );

            summary.records_written += 1;
            if report.resolution == StageOutcome::Degraded
                || report.content == StageOutcome::Degraded
            {
                summary.degraded += 1;
            }

            // Unconditional self-imposed rate limit, independent of how long
            // the per-stage calls took.
            tokio::time::sleep(delay).await;
        }

        tracing::info!(
            "Run complete: {} records written ({} degraded), {} blank keywords skipped",
            summary.records_written,
            summary.degraded,
            summary.skipped
        );

        Ok(summary)
    }

    /// Runs the three fetch stages for one keyword and assembles its record
    ///
    /// State machine per query:
    /// `PENDING -> RESOLVING -> RESOLVED|RESOLUTION_FAILED ->
    ///  FETCHING_CONTENT -> CONTENT_OK|CONTENT_FAILED ->
    ///  FETCHING_OUTLINE -> OUTLINE_OK|OUTLINE_EMPTY`.
    /// The caller appends the record and completes the transition to
    /// `RECORD_WRITTEN`.
    async fn process_query(&self, index: usize, query: &str) -> Result<(ArticleRecord, QueryReport)> {
        let mut state = QueryState::Pending.transition(QueryState::Resolving)?;

        // Stage 1: title resolution. Retry exhaustion falls back to the raw
        // query; a successful "no match" uses the same fallback title but is
        // not a degraded outcome.
        let (resolved, resolution) = match self.client.resolve_title(query).await {
            Ok(title) => {
                state = state.transition(QueryState::Resolved)?;
                (title, StageOutcome::Ok)
            }
            Err(e) => {
                tracing::warn!("[{}] Title resolution error: {}", index, e);
                state = state.transition(QueryState::ResolutionFailed)?;
                (None, StageOutcome::Degraded)
            }
        };
        let title = resolved.unwrap_or_else(|| query.to_string());

        // Stage 2: plain-text extract for the effective title.
        state = state.transition(QueryState::FetchingContent)?;
        let (extract, content) = match self.client.fetch_extract(&title).await {
            Ok(extract) => {
                state = state.transition(QueryState::ContentOk)?;
                (extract, StageOutcome::Ok)
            }
            Err(e) => {
                tracing::warn!("[{}] Extract error: {}", index, e);
                state = state.transition(QueryState::ContentFailed)?;
                (Extract::missing(&title), StageOutcome::Degraded)
            }
        };

        // Stage 3: outline for the normalized title; never raises.
        state = state.transition(QueryState::FetchingOutline)?;
        let outline = self.client.fetch_outline(&extract.normalized_title).await;
        state.transition(if outline.is_empty() {
            QueryState::OutlineEmpty
        } else {
            QueryState::OutlineOk
        })?;

        let url = canonical_url(&self.config.wikipedia.language, &extract.normalized_title)?;

        let report = QueryReport {
            query: query.to_string(),
            title: extract.normalized_title.clone(),
            resolution,
            content,
            outline_sections: outline.len(),
        };

        let record = ArticleRecord {
            url: url.to_string(),
            title: extract.normalized_title,
            table_of_contents: outline,
            raw_text: extract.text,
        };

        Ok((record, report))
    }
}

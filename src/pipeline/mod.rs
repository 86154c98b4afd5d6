//! Pipeline module - keyword list to NDJSON dataset
//!
//! This module contains the run-level flow:
//! - Run-marker bookkeeping (first run vs subsequent run)
//! - Keyword input loading
//! - Dataset directory management
//! - The sequential per-keyword coordinator

mod coordinator;
mod record;

pub use coordinator::{Coordinator, QueryReport, RunSummary, StageOutcome};
pub use record::{canonical_url, ArticleRecord};

use crate::config::Config;
use crate::output::NdjsonWriter;
use crate::{input, marker, Result};
use std::path::Path;

/// File name of the NDJSON dataset inside the dataset directory
pub const DATASET_FILENAME: &str = "data.txt";

/// Runs a complete fetch operation
///
/// This is the main entry point. Behavior depends on the run marker:
/// - Marker absent (first run): create it, then fetch immediately when
///   `auto-fetch-on-first-run` is set, otherwise stop and let a re-run fetch.
/// - Marker present (subsequent run): clear the dataset directory and
///   refetch everything.
///
/// # Arguments
///
/// * `config` - The validated run configuration
/// * `fresh` - Remove an existing marker first, forcing first-run behavior
///
/// # Returns
///
/// * `Ok(RunSummary)` - Run finished (possibly having fetched nothing)
/// * `Err(GleanError)` - Keyword input unreadable, output unwritable, or
///   client construction failed
pub async fn run(config: Config, fresh: bool) -> Result<RunSummary> {
    let marker_path = Path::new(&config.output.marker_path).to_path_buf();

    if fresh && marker::exists(&marker_path) {
        tracing::info!("Removing existing run marker (--fresh)");
        std::fs::remove_file(&marker_path)?;
    }

    // Keyword input is one of the two fatal dependencies; fail before
    // touching the marker or the dataset.
    let keywords = input::load_keywords(
        Path::new(&config.input.keywords_path),
        &config.input.keyword_column,
    )?;
    tracing::info!(
        "Loaded {} keywords from {}",
        keywords.len(),
        config.input.keywords_path
    );

    let dataset_dir = Path::new(&config.output.dataset_dir).to_path_buf();

    if !marker::exists(&marker_path) {
        let run_marker = marker::create(&marker_path)?;
        tracing::info!("Local run marker created: {}", run_marker.token);

        if !config.output.auto_fetch_on_first_run {
            tracing::info!("Run marker written. Re-run to fetch and store data.");
            return Ok(RunSummary::default());
        }
        tracing::info!("Fetching articles now (auto-fetch-on-first-run enabled)");
    } else {
        // Subsequent run: prior output is cleared and everything refetched.
        clear_dataset_dir(&dataset_dir);

        let run_marker = marker::read(&marker_path)?;
        tracing::info!(
            "Run marker present ({}), refetching all articles",
            run_marker.token
        );
    }

    std::fs::create_dir_all(&dataset_dir)?;
    let out_path = dataset_dir.join(DATASET_FILENAME);
    let mut writer = NdjsonWriter::create(&out_path)?;

    let coordinator = Coordinator::new(config)?;
    let summary = coordinator.run(&keywords, &mut writer).await?;

    tracing::info!("Saved NDJSON to: {}", out_path.display());
    Ok(summary)
}

/// Removes prior files from the dataset directory
///
/// Individual removal failures are warnings, matching the overwrite-not-merge
/// contract without making cleanup fatal.
fn clear_dataset_dir(dataset_dir: &Path) {
    let entries = match std::fs::read_dir(dataset_dir) {
        Ok(entries) => entries,
        // A directory that does not exist yet has nothing to clear.
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() {
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::warn!("Could not remove {}: {}", path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_clear_dataset_dir_removes_files() {
        let dir = tempdir().unwrap();
        let file_a = dir.path().join("data.txt");
        let file_b = dir.path().join("stale.txt");
        std::fs::write(&file_a, "old").unwrap();
        std::fs::write(&file_b, "old").unwrap();

        clear_dataset_dir(dir.path());

        assert!(!file_a.exists());
        assert!(!file_b.exists());
    }

    #[test]
    fn test_clear_dataset_dir_missing_dir_is_noop() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("never-created");
        clear_dataset_dir(&missing);
        assert!(!missing.exists());
    }
}

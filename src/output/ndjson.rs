//! NDJSON dataset writer
//!
//! Appends one JSON object per line and flushes after every line, so an
//! interrupted run leaves a valid, inspectable partial dataset. Non-ASCII
//! characters are preserved unescaped.

use crate::pipeline::ArticleRecord;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-as-you-go writer for the NDJSON dataset
pub struct NdjsonWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    records_written: usize,
}

impl NdjsonWriter {
    /// Creates (truncating) the dataset file at the given path
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            records_written: 0,
        })
    }

    /// Serializes one record as a single line and flushes it to disk
    pub fn append_record(&mut self, record: &ArticleRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        // Flush per line: partial runs must stay durable and truncatable.
        self.writer.flush()?;
        self.records_written += 1;
        Ok(())
    }

    /// Number of records written so far
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Path of the dataset file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_record(title: &str) -> ArticleRecord {
        ArticleRecord {
            url: format!(
                "https://en.wikipedia.org/wiki/{}",
                title.replace(' ', "_")
            ),
            title: title.to_string(),
            table_of_contents: vec!["Early life".to_string()],
            raw_text: format!("{} was...", title),
        }
    }

    #[test]
    fn test_one_json_object_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");

        let mut writer = NdjsonWriter::create(&path).unwrap();
        writer.append_record(&sample_record("Albert Einstein")).unwrap();
        writer.append_record(&sample_record("Marie Curie")).unwrap();
        assert_eq!(writer.records_written(), 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("url").is_some());
            assert!(value.get("title").is_some());
            assert!(value.get("table_of_contents").is_some());
            assert!(value.get("raw_text").is_some());
        }
    }

    #[test]
    fn test_lines_are_durable_without_dropping_writer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");

        let mut writer = NdjsonWriter::create(&path).unwrap();
        writer.append_record(&sample_record("Albert Einstein")).unwrap();

        // Read back while the writer is still alive: the per-line flush must
        // already have hit the file.
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        assert!(content.contains("Albert Einstein"));
        drop(writer);
    }

    #[test]
    fn test_create_truncates_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "stale content\n").unwrap();

        let mut writer = NdjsonWriter::create(&path).unwrap();
        writer.append_record(&sample_record("Marie Curie")).unwrap();
        drop(writer);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale content"));
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_non_ascii_written_unescaped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");

        let record = ArticleRecord {
            url: "https://en.wikipedia.org/wiki/Kurt_G%C3%B6del".to_string(),
            title: "Kurt Gödel".to_string(),
            table_of_contents: vec![],
            raw_text: "Kurt Gödel was a logician.".to_string(),
        };

        let mut writer = NdjsonWriter::create(&path).unwrap();
        writer.append_record(&record).unwrap();
        drop(writer);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Kurt Gödel"));
        assert!(!content.contains("\\u00f6"));
    }
}

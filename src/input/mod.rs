//! Keyword input table
//!
//! The input collaborator is an ordered CSV table; one column (by default
//! "Keyword") is consumed and row order determines output order. Blank cells
//! are kept so the orchestrator can skip them without reordering anything.

use crate::{GleanError, Result};
use std::path::Path;

/// Loads the keyword column from a CSV table, preserving row order
///
/// # Arguments
///
/// * `path` - Path to the CSV file (header row required)
/// * `column` - Header name of the column to consume
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Keywords in row order, blanks included
/// * `Err(GleanError)` - File unreadable, malformed CSV, or missing column
pub fn load_keywords(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let column_index = headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| GleanError::MissingColumn(column.to_string()))?;

    let mut keywords = Vec::new();
    for row in reader.records() {
        let row = row?;
        keywords.push(row.get(column_index).unwrap_or("").to_string());
    }

    Ok(keywords)
}

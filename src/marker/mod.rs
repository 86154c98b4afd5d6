//! Run marker file
//!
//! A plain-text file holding one opaque token. Its presence means "this is
//! not the first execution"; the token itself is only ever read back for
//! logging, never interpreted.

use crate::Result;
use chrono::Utc;
use std::path::Path;
use uuid::Uuid;

/// One persisted run marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMarker {
    /// Opaque token identifying the run that created the marker
    pub token: String,
}

/// Returns true when a marker file exists at the given path
pub fn exists(path: &Path) -> bool {
    path.is_file()
}

/// Creates a marker file with a freshly generated token
///
/// Parent directories are created as needed. Token shape:
/// UTC `%Y%m%d%H%M%S`, a hyphen, and eight hex characters.
pub fn create(path: &Path) -> Result<RunMarker> {
    let token = generate_token();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &token)?;

    Ok(RunMarker { token })
}

/// Reads the token back from an existing marker file
pub fn read(path: &Path) -> Result<RunMarker> {
    let token = std::fs::read_to_string(path)?.trim().to_string();
    Ok(RunMarker { token })
}

/// Generates an opaque run token
fn generate_token() -> String {
    let timestamp = Utc::now().format("%Y%m%d%H%M%S");
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", timestamp, &suffix[..8])
}

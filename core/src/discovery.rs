#![deny(missing_docs)]

//! # Source Discovery
//!
//! Walks a project directory and loads every header source into memory.
//! Entries are visited in file-name order so repeated runs see the same
//! sequence.

use crate::error::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Extension (without the dot) of the files scanned by default.
pub const DEFAULT_EXTENSION: &str = "hpp";

/// One loaded source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Path of the file as reached from the walk root.
    pub path: PathBuf,
    /// Full file contents.
    pub text: String,
}

/// Recursively collects all files under `root` whose extension equals
/// `extension`, reading each one.
///
/// Symlinked files are included. Bytes that are not valid UTF-8 are decoded
/// lossily so one oddly encoded header does not hide the rest. Any I/O
/// failure (missing root, unreadable file) aborts discovery.
pub fn discover_sources(root: &Path, extension: &str) -> AppResult<Vec<SourceUnit>> {
    if !root.is_dir() {
        return Err(AppError::General(format!(
            "Source directory not found: {:?}",
            root
        )));
    }

    let mut units = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || path.extension().map_or(true, |ext| ext != extension) {
            continue;
        }

        let bytes = fs::read(path)
            .map_err(|e| AppError::General(format!("Failed to read file {:?}: {}", path, e)))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        debug!(path = %path.display(), bytes = text.len(), "discovered source");

        units.push(SourceUnit {
            path: path.to_path_buf(),
            text,
        });
    }

    Ok(units)
}

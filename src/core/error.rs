// src/core/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Every way a roadmap invocation can fail once the target path is known.
///
/// All variants are terminal: nothing is retried and, for `add-item`, the file
/// on disk is left as it was before the command started.
#[derive(Error, Debug)]
pub enum RoadmapError {
    /// The roadmap path does not resolve to a regular file.
    #[error("Roadmap file not found at {}", .path.display())]
    FileNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },
    /// The file exists but could not be read as UTF-8 text.
    #[error("Could not read roadmap file '{}': {source}", .path.display())]
    Unreadable {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// No `### Phase N:` heading carries the requested number.
    #[error("Phase {number} not found.")]
    PhaseNotFound {
        /// The number as it was requested.
        number: String,
    },
    /// Item text that would not form exactly one checklist line.
    #[error("Item text must be a single non-empty line, got {text:?}")]
    InvalidItem {
        /// The rejected text.
        text: String,
    },
    /// Writing or replacing the roadmap file failed.
    #[error("Failed to update roadmap '{}': {source}", .path.display())]
    PersistenceFailure {
        /// The roadmap that was being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The advisory lock guarding a mutation could not be taken.
    #[error("Could not lock roadmap through '{}': {source}", .path.display())]
    Lock {
        /// The lock file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Shorthand used across the core and storage layers.
pub type RoadmapResult<T> = Result<T, RoadmapError>;

// src/models.rs

use serde::Deserialize;
use std::path::PathBuf;

// --- Document Model ---

/// A phase heading found in the roadmap (`### Phase 3: Title`).
///
/// The number is kept as the literal digit string of the heading. Lookups
/// compare it textually, so `"01"` and `"1"` are different phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    /// The digit string exactly as written in the heading.
    pub number: String,
    /// The heading text after the colon, trimmed.
    pub title: String,
    /// Zero-based index of the heading line in the document.
    pub start: usize,
}

/// The half-open line range `[start, end)` covered by a phase.
///
/// Never stored; always derived from the phase index by the boundary resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSpan {
    /// Index of the phase heading line.
    pub start: usize,
    /// Index of the next phase heading, or the total line count.
    pub end: usize,
}

impl PhaseSpan {
    /// Number of lines in the span, heading included.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// A span always holds at least its heading, so this is only true for
    /// a malformed span.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// --- Commands ---

/// One roadmap operation, as requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every phase heading in document order.
    List,
    /// Print the block of a single phase.
    View {
        /// Phase number, compared textually.
        number: String,
    },
    /// Add an unchecked item to a phase.
    AddItem {
        /// Phase number, compared textually.
        number: String,
        /// Item text, inserted verbatim.
        text: String,
    },
    /// Print the whole roadmap.
    Show,
}

impl Command {
    /// Whether executing this command can produce a new document.
    pub fn mutates(&self) -> bool {
        matches!(self, Self::AddItem { .. })
    }
}

// --- Configuration Models ---

/// The shape of both `roadmap.toml` (project) and `config.toml` (user).
/// Every field is optional so the two files can be layered.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TomlRoadmapConfig {
    /// Location of the roadmap file. Relative paths are resolved against
    /// the project root; `~` and environment variables are expanded.
    pub path: Option<String>,
    /// Whether `add-item` takes the advisory lock. Defaults to `true`.
    pub lock: Option<bool>,
}

impl TomlRoadmapConfig {
    /// Layers `self` on top of `base`: fields set in `self` win.
    pub fn over(self, base: Self) -> Self {
        Self {
            path: self.path.or(base.path),
            lock: self.lock.or(base.lock),
        }
    }
}

/// The fully resolved roadmap location handed to every command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapTarget {
    /// Absolute (or root-relative, when the root itself is relative) path
    /// of the roadmap file.
    pub path: PathBuf,
    /// Whether mutating commands take the advisory lock.
    pub lock: bool,
}

// src/core/mod.rs

/// Turns phase headings into line spans.
pub mod boundary;
pub mod commands;
pub mod config_loader;
/// The in-memory, byte-preserving roadmap.
pub mod document;
/// The roadmap error taxonomy.
pub mod error;
/// Finds `### Phase N:` headings.
pub mod indexer;
/// Where a new checklist item goes, and how it is written.
pub mod insertion;
/// Project root discovery and roadmap path expansion.
pub mod paths;

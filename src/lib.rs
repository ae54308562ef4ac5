//! Lists, views and extends the phase checklists of a Markdown roadmap.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

/// Command-line surface: argument parsing, dispatch and handlers.
pub mod cli;
/// File names, markers and defaults.
pub mod constants;
pub mod core;
/// Data shared between the layers: phases, spans, commands and config.
pub mod models;
pub mod system;

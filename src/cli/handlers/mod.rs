// src/cli/handlers/mod.rs

// One module per command; shared plumbing lives in `commons`.

/// `add-item`
pub mod add_item;
/// Argument parsing and the shared load, execute and persist paths.
pub mod commons;
/// `list`
pub mod list;
/// `show`
pub mod show;
/// `view`
pub mod view;

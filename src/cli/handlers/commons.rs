// src/cli/handlers/commons.rs

// This module contains shared functions used by multiple handlers.

use anyhow::Result;
use clap::{Parser, error::ErrorKind};

use crate::{
    core::commands::{self, Outcome},
    models::{Command, RoadmapTarget},
    system::{lock::RoadmapLock, storage},
};

/// Parses a handler's own arguments. `--help` and `--version` print and exit
/// successfully; anything else clap rejects becomes an error.
pub fn parse_args<T: Parser>(args: &[String]) -> Result<T> {
    T::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => anyhow::Error::from(e),
    })
}

/// Runs `command` against the roadmap at `target`, taking the mutation path
/// only for commands that can change the file.
pub fn run(target: &RoadmapTarget, command: &Command) -> Result<()> {
    if command.mutates() {
        run_mutation(target, command)
    } else {
        run_read_only(target, command)
    }
}

/// Runs a command that only reads the roadmap and prints its output.
fn run_read_only(target: &RoadmapTarget, command: &Command) -> Result<()> {
    let document = storage::load_document(&target.path)?;
    let outcome = commands::execute(&document, command)?;
    println!("{}", outcome.output);
    Ok(())
}

/// Runs a mutating command: lock, load, execute, persist, then report.
///
/// The confirmation is printed only once the new document is on disk.
fn run_mutation(target: &RoadmapTarget, command: &Command) -> Result<()> {
    // A missing roadmap is reported before any lock file is created next to it.
    storage::require_file(&target.path)?;

    let _lock = if target.lock {
        Some(RoadmapLock::acquire(&target.path)?)
    } else {
        log::debug!("Locking disabled for '{}'", target.path.display());
        None
    };

    let document = storage::load_document(&target.path)?;
    let Outcome { output, document } = commands::execute(&document, command)?;

    if let Some(updated) = document {
        storage::persist_document(&target.path, &updated)?;
    }

    println!("{}", output);
    Ok(())
}

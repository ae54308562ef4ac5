// src/cli/mod.rs

use clap::Parser;
use std::path::PathBuf;

pub mod args;
/// Command registry and dispatch.
pub mod dispatcher;
/// One handler per command.
pub mod handlers;

/// roadmap: lists, views and extends the phases of a project roadmap.
///
/// The roadmap is a Markdown file split into `### Phase N: Title` sections,
/// each holding `- [ ] task` items. Commands:
///
///   list (ls)                 List all phases.
///   view <PHASE>              Print one phase block.
///   add-item (add) <PHASE> <TEXT>
///                             Add an unchecked item to a phase.
///   show                      Print the whole roadmap.
///
/// Phase numbers are matched exactly as written: `01` is not `1`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about, verbatim_doc_comment)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// The roadmap file, relative to the working directory. Overrides any configuration.
    #[arg(long, short, env = "ROADMAP_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// The project root holding `roadmap.toml`. Defaults to the nearest
    /// ancestor containing `roadmap.toml` or `.git`.
    #[arg(long, env = "ROADMAP_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// The command to run, followed by its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub args: Vec<String>,
}

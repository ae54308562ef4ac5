// src/cli/handlers/add_item.rs

use anyhow::Result;

use super::commons;
use crate::{
    cli::args::AddItemArgs,
    models::{Command, RoadmapTarget},
};

/// Adds `- [ ] <text>` to a phase and rewrites the roadmap.
pub fn handle(args: Vec<String>, target: &RoadmapTarget) -> Result<()> {
    // 1. Parse args. Multiple words are accepted unquoted.
    let add_args: AddItemArgs = commons::parse_args(&args)?;
    let command = Command::AddItem {
        number: add_args.phase,
        text: add_args.text.join(" "),
    };

    // 2. Lock, apply and persist.
    commons::run(target, &command)
}

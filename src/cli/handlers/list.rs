use anyhow::Result;

use super::commons;
use crate::{
    cli::args::ListArgs,
    models::{Command, RoadmapTarget},
};

/// Prints `Available Phases:` and one line per phase.
pub fn handle(args: Vec<String>, target: &RoadmapTarget) -> Result<()> {
    let _: ListArgs = commons::parse_args(&args)?;
    commons::run(target, &Command::List)
}

use anyhow::Result;

use super::commons;
use crate::{
    cli::args::ShowArgs,
    models::{Command, RoadmapTarget},
};

/// Prints the whole roadmap file.
pub fn handle(args: Vec<String>, target: &RoadmapTarget) -> Result<()> {
    let _: ShowArgs = commons::parse_args(&args)?;
    commons::run(target, &Command::Show)
}

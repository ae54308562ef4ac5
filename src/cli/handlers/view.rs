use anyhow::Result;

use super::commons;
use crate::{
    cli::args::ViewArgs,
    models::{Command, RoadmapTarget},
};

/// Prints the block of one phase, heading included.
pub fn handle(args: Vec<String>, target: &RoadmapTarget) -> Result<()> {
    let view_args: ViewArgs = commons::parse_args(&args)?;
    commons::run(
        target,
        &Command::View {
            number: view_args.phase,
        },
    )
}

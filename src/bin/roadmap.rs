// src/bin/roadmap.rs

//! Command-line entry point for `roadmap`.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use roadmap::{
    cli::{Cli, dispatcher},
    core::{
        config_loader::{self, ResolveOptions},
        paths,
    },
};
use std::env;

/// The main entry point of the `roadmap` application.
/// It sets up logging, parses arguments, resolves the roadmap file, dispatches
/// to the command handler, and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        log::debug!("Command failed: {:?}", e);
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let cwd = env::current_dir().context("Could not determine the current directory")?;
    let options = ResolveOptions {
        file: cli.file,
        root: cli.root,
        user_config: paths::user_config_path(),
    };
    let target = config_loader::resolve_target(&options, &cwd)?;

    dispatcher::dispatch(cli.args, &target)
}

// src/cli/args.rs

//! Argument structs for each command, parsed after the command name.

use clap::Parser;

/// Arguments of `list`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, about = "Lists every phase of the roadmap.")]
pub struct ListArgs {}

/// Arguments of `view`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, about = "Prints the block of a single phase.")]
pub struct ViewArgs {
    /// The phase number, exactly as written in its heading.
    pub phase: String,
}

/// Arguments of `add-item`.
#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Adds an unchecked item to a phase, after its last existing item."
)]
pub struct AddItemArgs {
    /// The phase number, exactly as written in its heading.
    pub phase: String,

    /// The item text. Several words are joined with single spaces.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub text: Vec<String>,
}

/// Arguments of `show`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, about = "Prints the whole roadmap.")]
pub struct ShowArgs {}

use anyhow::{Result, anyhow};

use crate::{cli::handlers, models::RoadmapTarget};

// --- Command Definition and Registry ---

/// Defines a command, its aliases, and its handler.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>, &RoadmapTarget) -> Result<()>,
}

/// The single source of truth for all commands.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "list",
        aliases: &["ls"],
        handler: handlers::list::handle,
    },
    CommandDefinition {
        name: "view",
        aliases: &[],
        handler: handlers::view::handle,
    },
    CommandDefinition {
        name: "add-item",
        aliases: &["add"],
        handler: handlers::add_item::handle,
    },
    CommandDefinition {
        name: "show",
        aliases: &[],
        handler: handlers::show::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Comma-separated command names, for error messages.
pub fn command_names() -> String {
    COMMAND_REGISTRY
        .iter()
        .map(|cmd| cmd.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Routes `<command> [args...]` to its handler.
pub fn dispatch(all_args: Vec<String>, target: &RoadmapTarget) -> Result<()> {
    log::debug!("Dispatching args: {:?}", all_args);

    let mut args = all_args.into_iter();
    let Some(name) = args.next() else {
        return Err(anyhow!(
            t!("cli.error.no_command"),
            commands = command_names()
        ));
    };

    let command = find_command(&name).ok_or_else(|| {
        anyhow!(
            t!("cli.error.unknown_command"),
            name = name,
            commands = command_names()
        )
    })?;

    (command.handler)(args.collect(), target)
}

/// Main entry point for the glotsync CLI.
///
/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and any per-unit failures
/// - `Err` if the command cannot run at all (e.g., invalid config, missing master catalog)
use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, extract::extract, init::init, lookup::lookup, status::status, sync::sync,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Status(cmd)) => status(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}

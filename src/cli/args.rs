//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan source files for hardcoded text and suggest catalog keys
//! - `sync`: Bring every locale catalog in line with the master catalog
//! - `status`: Show pending, missing and orphan keys per locale
//! - `lookup`: Resolve one key the way the application does at render time
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Sync(cmd)) => cmd.common.verbose,
            Some(Command::Status(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Master locale (overrides config file)
    #[arg(long)]
    pub master_locale: Option<String>,

    /// Root used to derive key namespaces from file paths (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Messages directory path (overrides config file)
    #[arg(long, env = "GLOTSYNC_MESSAGES_ROOT")]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Source file or directory to scan
    pub path: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    /// Report changes without writing catalogs
    #[arg(long)]
    pub dry_run: bool,

    /// Treat a missing locale catalog as empty and create it
    #[arg(long)]
    pub init_missing: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Dotted namespace, e.g. `inventory.orders`
    pub namespace: String,

    /// Key inside the namespace
    pub key: String,

    /// Locale to resolve for (default: master locale)
    #[arg(long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find hardcoded localizable strings and suggest catalog keys
    Extract(ExtractCommand),
    /// Add missing keys to and remove orphan keys from every locale catalog
    Sync(SyncCommand),
    /// Show translation progress for every locale
    Status(StatusCommand),
    /// Resolve a key, falling back to the master locale and then the raw key
    Lookup(LookupCommand),
    /// Initialize a new .glotsyncrc.json configuration file
    Init,
}

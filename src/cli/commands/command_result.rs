use crate::cli::exit_status::ExitStatus;
use crate::core::{
    UnitFailure,
    catalog::{Catalog, KeyPath},
    fragment::SuggestionFragment,
    scanner::ExtractedString,
};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Sync(SyncSummary),
    Status(StatusSummary),
    Lookup(LookupSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub extracted: Vec<ExtractedString>,
    pub fragment: SuggestionFragment,
    pub files_scanned: usize,
}

#[derive(Debug)]
pub struct SyncSummary {
    pub master_locale: String,
    pub locales: Vec<LocaleSync>,
    pub is_dry_run: bool,
}

/// Changes made (or, in a dry run, to be made) to one locale catalog.
#[derive(Debug)]
pub struct LocaleSync {
    pub locale: String,
    /// Added key paths with their pending values.
    pub added: Vec<(KeyPath, String)>,
    pub removed: Vec<KeyPath>,
    pub refreshed: Vec<KeyPath>,
    /// Empty namespaces dropped because master does not have them.
    pub pruned: Vec<KeyPath>,
    /// Master text of the added keys, shaped as a catalog.
    pub added_fragment: Catalog,
    /// The catalog file did not exist and was started from scratch.
    pub created: bool,
    /// The catalog content differs from what is on disk.
    pub changed: bool,
}

#[derive(Debug)]
pub struct StatusSummary {
    pub master_locale: String,
    pub master_key_count: usize,
    pub locales: Vec<LocaleStatus>,
}

#[derive(Debug)]
pub struct LocaleStatus {
    pub locale: String,
    /// Pending keys that are still in the master catalog.
    pub pending: Vec<KeyPath>,
    pub missing: Vec<KeyPath>,
    pub orphans: Vec<KeyPath>,
}

impl LocaleStatus {
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty() && self.missing.is_empty() && self.orphans.is_empty()
    }
}

#[derive(Debug)]
pub struct LookupSummary {
    pub locale: String,
    /// `None` when nothing resolved and the raw key is shown instead.
    pub value: Option<String>,
    pub display: String,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False when the config file already existed.
    pub created: bool,
}

/// Result of running glotsync commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files or locales that could not be processed. The rest of the run
    /// still completed.
    pub failures: Vec<UnitFailure>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            failures: Vec::new(),
        }
    }

    pub fn with_failures(summary: CommandSummary, failures: Vec<UnitFailure>) -> Self {
        Self { summary, failures }
    }

    pub fn exit_status(&self) -> ExitStatus {
        let init_refused = matches!(
            self.summary,
            CommandSummary::Init(InitSummary { created: false })
        );
        ExitStatus::from_failed_units(self.failures.len() + usize::from(init_refused))
    }
}

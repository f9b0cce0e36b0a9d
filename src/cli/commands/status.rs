use std::collections::BTreeSet;

use anyhow::{Context, Result};
use tracing::warn;

use super::super::args::StatusCommand;
use super::{CommandContext, CommandResult, CommandSummary, LocaleStatus, StatusSummary};
use crate::core::{
    UnitFailure,
    catalog::{Catalog, KeyPath},
    pending::is_pending,
};

pub fn status(cmd: StatusCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let master_locale = ctx.master_locale().to_string();
    let master = ctx
        .store
        .load(&master_locale)
        .with_context(|| format!("Failed to load master catalog '{}'", master_locale))?;

    let mut locales = Vec::new();
    let mut failures = Vec::new();

    for locale in ctx.target_locales()? {
        match ctx.store.load(&locale) {
            Ok(target) => locales.push(locale_status(&master, &target, locale)),
            Err(error) => {
                warn!(locale = %locale, %error, "cannot read catalog");
                failures.push(UnitFailure::new(locale, error));
            }
        }
    }

    Ok(CommandResult::with_failures(
        CommandSummary::Status(StatusSummary {
            master_locale,
            master_key_count: master.leaf_count(),
            locales,
        }),
        failures,
    ))
}

/// Compare a target catalog with the master without modifying either.
fn locale_status(master: &Catalog, target: &Catalog, locale: String) -> LocaleStatus {
    let master_paths: BTreeSet<KeyPath> = master.leaf_paths().into_iter().collect();
    let target_leaves = target.leaves();
    let target_paths: BTreeSet<&KeyPath> = target_leaves.iter().map(|(path, _)| path).collect();

    let pending = target_leaves
        .iter()
        .filter(|(path, value)| is_pending(value) && master_paths.contains(path))
        .map(|(path, _)| path.clone())
        .collect();
    let missing = master_paths
        .iter()
        .filter(|path| !target_paths.contains(path))
        .cloned()
        .collect();
    let orphans = target_leaves
        .iter()
        .filter(|(path, _)| !master_paths.contains(path))
        .map(|(path, _)| path.clone())
        .collect();

    LocaleStatus {
        locale,
        pending,
        missing,
        orphans,
    }
}

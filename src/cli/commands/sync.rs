use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::super::args::SyncCommand;
use super::{CommandContext, CommandResult, CommandSummary, LocaleSync, SyncSummary};
use crate::core::{
    self, Error, UnitFailure,
    catalog::Catalog,
    fragment::added_fragment,
    sync::{SyncOptions, sync as sync_catalogs},
};

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let master_locale = ctx.master_locale().to_string();
    let master = ctx
        .store
        .load(&master_locale)
        .with_context(|| format!("Failed to load master catalog '{}'", master_locale))?;

    let run = LocaleRun {
        ctx: &ctx,
        master: &master,
        options: ctx.config.sync_options(),
        dry_run: cmd.dry_run,
        init_missing: cmd.init_missing,
    };
    let mut locales = Vec::new();
    let mut failures = Vec::new();

    for locale in ctx.target_locales()? {
        match run.sync(&locale) {
            Ok(report) => locales.push(report),
            Err(error) => {
                warn!(locale = %locale, %error, "locale not synchronized");
                failures.push(UnitFailure::new(locale, error));
            }
        }
    }

    Ok(CommandResult::with_failures(
        CommandSummary::Sync(SyncSummary {
            master_locale,
            locales,
            is_dry_run: cmd.dry_run,
        }),
        failures,
    ))
}

struct LocaleRun<'a> {
    ctx: &'a CommandContext,
    master: &'a Catalog,
    options: SyncOptions,
    dry_run: bool,
    init_missing: bool,
}

impl LocaleRun<'_> {
    /// Synchronize one locale and write it back when it changed.
    fn sync(&self, locale: &str) -> core::Result<LocaleSync> {
        let (target, created) = match self.ctx.store.load(locale) {
            Ok(catalog) => (catalog, false),
            Err(Error::NotFound { path }) if self.init_missing => {
                debug!(locale, path = %path.display(), "starting missing catalog from scratch");
                (Catalog::new(), true)
            }
            Err(error) => return Err(error),
        };

        let outcome =
            sync_catalogs(self.master, &target, locale, self.options).map_err(|error| {
                error.with_catalog_files(
                    &self.ctx.store.path_for(self.ctx.master_locale()),
                    &self.ctx.store.path_for(locale),
                )
            })?;
        let changed = created || outcome.updated != target;
        if changed && !self.dry_run {
            self.ctx.store.save(locale, &outcome.updated)?;
        }

        let added = outcome
            .added
            .iter()
            .map(|path| {
                let value = outcome.updated.get_leaf(path).unwrap_or_default();
                (path.clone(), value.to_string())
            })
            .collect();

        Ok(LocaleSync {
            locale: locale.to_string(),
            added,
            removed: outcome.removed.iter().cloned().collect(),
            refreshed: outcome.refreshed.iter().cloned().collect(),
            pruned: outcome.pruned.iter().cloned().collect(),
            added_fragment: added_fragment(self.master, &outcome.added)?,
            created,
            changed,
        })
    }
}

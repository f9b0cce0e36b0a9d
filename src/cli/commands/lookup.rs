use anyhow::Result;
use tracing::warn;

use super::super::args::LookupCommand;
use super::{CommandContext, CommandResult, CommandSummary, LookupSummary};
use crate::core::lookup::Translations;

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let master_locale = ctx.master_locale();
    let locale = cmd.locale.unwrap_or_else(|| master_locale.to_string());

    // A broken catalog directory degrades to showing the raw key.
    let translations = match ctx
        .locales()
        .map_err(|e| format!("{e:#}"))
        .and_then(|locales| {
            Translations::load(&ctx.store, master_locale, &locales).map_err(|e| e.to_string())
        }) {
        Ok(translations) => translations,
        Err(reason) => {
            warn!(%reason, "translations unavailable");
            Translations::new(master_locale)
        }
    };

    let value = translations
        .resolve(&locale, &cmd.namespace, &cmd.key)
        .map(str::to_string);
    let display = translations
        .resolve_or_key(&locale, &cmd.namespace, &cmd.key)
        .into_owned();

    Ok(CommandResult::new(CommandSummary::Lookup(LookupSummary {
        locale,
        value,
        display,
    })))
}

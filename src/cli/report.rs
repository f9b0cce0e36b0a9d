//! Report formatting and printing utilities.
//!
//! Every report is a pure function of a command result written to any
//! `Write`, so output is deterministic and testable. Separate from core
//! logic to allow glotsync to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, InitSummary, LocaleStatus, LocaleSync,
    LookupSummary, StatusSummary, SyncSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{
    Error, UnitFailure,
    catalog::Catalog,
    fragment::{CollisionReason, KeyCollision},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the report to stdout and failures to stderr.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Print the report and failures to custom writers.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, writer: &mut W, errors: &mut E) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, writer),
        CommandSummary::Sync(summary) => print_sync(summary, writer),
        CommandSummary::Status(summary) => print_status(summary, writer),
        CommandSummary::Lookup(summary) => print_lookup(summary, writer, errors),
        CommandSummary::Init(summary) => print_init(summary, writer, errors),
    }
    print_failures(&result.failures, errors);
}

// ============================================================
// extract
// ============================================================

fn print_extract<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let number_width = summary.extracted.len().to_string().len();
    let indent = " ".repeat(number_width + 2);

    for (i, item) in summary.extracted.iter().enumerate() {
        let _ = writeln!(
            writer,
            "{:>width$}. \"{}\"",
            i + 1,
            item.text.bold(),
            width = number_width
        );
        let _ = writeln!(
            writer,
            "{}{} {}:{}",
            indent,
            "-->".blue(),
            item.source_file.display(),
            item.source_line
        );
        let _ = writeln!(
            writer,
            "{}{} {}",
            indent,
            "key:".dimmed(),
            item.suggested_key_path.to_string().cyan()
        );
        let _ = writeln!(
            writer,
            "{}{} {}",
            indent,
            "context:".dimmed(),
            item.context_snippet
        );
    }

    if !summary.fragment.collisions.is_empty() {
        let _ = writeln!(writer);
        for collision in &summary.fragment.collisions {
            print_collision(collision, writer);
        }
    }

    if !summary.fragment.catalog.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "{}", "Suggested catalog fragment:".bold());
        print_catalog_json(&summary.fragment.catalog, "", writer);
    }

    let _ = writeln!(writer);
    if summary.extracted.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "No hardcoded strings found in {}",
                plural(summary.files_scanned, "file", "files")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "Found {} in {}",
            plural(summary.extracted.len(), "string", "strings"),
            plural(summary.files_scanned, "file", "files")
        );
    }
}

fn print_collision<W: Write>(collision: &KeyCollision, writer: &mut W) {
    let detail = match &collision.reason {
        CollisionReason::DifferentText { existing } => {
            format!("already suggested for \"{}\"", existing)
        }
        CollisionReason::Shape(conflict) => conflict.to_string(),
    };
    let _ = writeln!(
        writer,
        "{}: key `{}` for \"{}\" {}",
        "warning".bold().yellow(),
        collision.path,
        collision.text,
        detail
    );
    let _ = writeln!(
        writer,
        "  {} {}:{}",
        "-->".blue(),
        collision.source_file.display(),
        collision.source_line
    );
}

// ============================================================
// sync
// ============================================================

fn print_sync<W: Write>(summary: &SyncSummary, writer: &mut W) {
    for locale in &summary.locales {
        print_locale_sync(locale, writer);
    }

    let added: usize = summary.locales.iter().map(|l| l.added.len()).sum();
    let removed: usize = summary.locales.iter().map(|l| l.removed.len()).sum();
    let pruned: usize = summary.locales.iter().map(|l| l.pruned.len()).sum();
    let changed = summary.locales.iter().filter(|l| l.changed).count();
    let locales = plural(summary.locales.len(), "locale", "locales");

    if summary.is_dry_run && changed > 0 {
        let pruning = if pruned > 0 {
            format!(
                ", prune {}",
                plural(pruned, "empty namespace", "empty namespaces")
            )
        } else {
            String::new()
        };
        let _ = writeln!(
            writer,
            "{} add {}, remove {}{} in {} (master: {})",
            "Would".yellow().bold(),
            plural(added, "key", "keys"),
            plural(removed, "key", "keys"),
            pruning,
            plural(changed, "catalog", "catalogs"),
            summary.master_locale
        );
        let _ = writeln!(writer, "Run without {} to write changes.", "--dry-run".cyan());
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Synced {} with {}: {} added, {} removed, {} pruned",
                locales, summary.master_locale, added, removed, pruned
            )
            .green()
        );
    }
}

fn print_locale_sync<W: Write>(locale: &LocaleSync, writer: &mut W) {
    let header = if locale.created {
        format!("{} (new catalog)", locale.locale)
    } else {
        locale.locale.clone()
    };
    let _ = writeln!(writer, "{}", header.bold());

    if !locale.changed {
        let _ = writeln!(writer, "  {} up to date", SUCCESS_MARK.green());
        let _ = writeln!(writer);
        return;
    }

    if !locale.added.is_empty() {
        let _ = writeln!(writer, "  Added {}:", plural(locale.added.len(), "key", "keys"));
        for (path, value) in &locale.added {
            let _ = writeln!(writer, "    {} {}: \"{}\"", "+".green(), path, value);
        }
    }

    if !locale.removed.is_empty() {
        let _ = writeln!(
            writer,
            "  Removed {}:",
            plural(locale.removed.len(), "key", "keys")
        );
        for path in &locale.removed {
            let _ = writeln!(writer, "    {} {}", "-".red(), path);
        }
    }

    if !locale.refreshed.is_empty() {
        let _ = writeln!(
            writer,
            "  Refreshed {}:",
            plural(locale.refreshed.len(), "pending key", "pending keys")
        );
        for path in &locale.refreshed {
            let _ = writeln!(writer, "    {} {}", "~".yellow(), path);
        }
    }

    if !locale.pruned.is_empty() {
        let _ = writeln!(
            writer,
            "  Pruned {}:",
            plural(locale.pruned.len(), "empty namespace", "empty namespaces")
        );
        for path in &locale.pruned {
            let _ = writeln!(writer, "    {} {}", "-".red(), path);
        }
    }

    if locale.added.is_empty()
        && locale.removed.is_empty()
        && locale.refreshed.is_empty()
        && locale.pruned.is_empty()
    {
        let _ = writeln!(writer, "  Layout realigned with master");
    }

    if !locale.added_fragment.is_empty() {
        let _ = writeln!(writer, "  Master entries for added keys:");
        print_catalog_json(&locale.added_fragment, "    ", writer);
    }

    let _ = writeln!(writer);
}

// ============================================================
// status
// ============================================================

fn print_status<W: Write>(summary: &StatusSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}: {}",
        "Master".bold(),
        summary.master_locale,
        plural(summary.master_key_count, "key", "keys")
    );

    let column = summary
        .locales
        .iter()
        .map(|l| UnicodeWidthStr::width(l.locale.as_str()))
        .max()
        .unwrap_or(0);

    for locale in &summary.locales {
        print_locale_status(locale, column, writer);
    }

    let incomplete = summary.locales.iter().filter(|l| !l.is_complete()).count();
    if incomplete == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All {} fully translated",
                plural(summary.locales.len(), "locale", "locales")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} need attention",
            FAILURE_MARK.yellow(),
            plural(incomplete, "locale", "locales")
        );
    }
}

fn print_locale_status<W: Write>(locale: &LocaleStatus, column: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "  {}  {} pending, {} missing, {} orphan",
        pad(&locale.locale, column),
        locale.pending.len(),
        locale.missing.len(),
        locale.orphans.len()
    );

    let indent = " ".repeat(column + 4);
    for path in &locale.pending {
        let _ = writeln!(writer, "{}{} {}", indent, "~".yellow(), path);
    }
    for path in &locale.missing {
        let _ = writeln!(writer, "{}{} {} (missing)", indent, "+".green(), path);
    }
    for path in &locale.orphans {
        let _ = writeln!(writer, "{}{} {} (orphan)", indent, "-".red(), path);
    }
}

// ============================================================
// lookup / init
// ============================================================

fn print_lookup<W: Write, E: Write>(summary: &LookupSummary, writer: &mut W, errors: &mut E) {
    let _ = writeln!(writer, "{}", summary.display);
    if summary.value.is_none() {
        let _ = writeln!(
            errors,
            "{}: `{}` does not resolve for locale '{}', showing the raw key",
            "warning".bold().yellow(),
            summary.display,
            summary.locale
        );
    }
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, writer: &mut W, errors: &mut E) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            errors,
            "{}: {} already exists",
            "error".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

// ============================================================
// failures
// ============================================================

fn print_failures<W: Write>(failures: &[UnitFailure], writer: &mut W) {
    if failures.is_empty() {
        return;
    }

    for failure in failures {
        let _ = writeln!(writer, "{}: {}", "error".bold().red(), failure);
        if let Error::TypeConflicts {
            conflicts,
            master_file,
            target_file,
            ..
        } = &failure.error
        {
            for (file, role) in [(master_file, "master"), (target_file, "target")] {
                if let Some(file) = file {
                    let _ = writeln!(writer, "  {} {} ({})", "-->".blue(), file.display(), role);
                }
            }
            for conflict in conflicts {
                let _ = writeln!(writer, "  {} {}", "=".blue(), conflict);
            }
        }
    }

    let _ = writeln!(
        writer,
        "{} {} failed",
        FAILURE_MARK.red(),
        plural(failures.len(), "unit", "units")
    );
}

// ============================================================
// Internal Functions
// ============================================================

/// Pretty JSON of `catalog`, every line prefixed with `indent`.
fn print_catalog_json<W: Write>(catalog: &Catalog, indent: &str, writer: &mut W) {
    let Ok(json) = catalog.to_pretty_json() else {
        return;
    };
    for line in json.lines() {
        let _ = writeln!(writer, "{}{}", indent, line);
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

/// Left-align `text` to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}

// ============================================================
// Tests
// ============================================================

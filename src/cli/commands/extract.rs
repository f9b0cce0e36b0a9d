use anyhow::{Context, Result};
use tracing::warn;

use super::super::args::ExtractCommand;
use super::{CommandContext, CommandResult, CommandSummary, ExtractSummary};
use crate::core::{
    Error, UnitFailure,
    fragment::suggestion_fragment,
    scanner::{Scanner, TreeScan},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let scanner = Scanner::new(ctx.config.scan_options())
        .context("Failed to build the detection pattern from 'detectionAlphabet'")?;

    let scan = match scanner.scan_tree(&cmd.path) {
        Ok(scan) => scan,
        Err(error @ Error::NotFound { .. }) => {
            warn!(path = %cmd.path.display(), "nothing to scan");
            TreeScan {
                failures: vec![UnitFailure::new(cmd.path.display().to_string(), error)],
                ..Default::default()
            }
        }
        Err(error) => return Err(error.into()),
    };

    let fragment = suggestion_fragment(&scan.extracted)?;

    Ok(CommandResult::with_failures(
        CommandSummary::Extract(ExtractSummary {
            extracted: scan.extracted,
            fragment,
            files_scanned: scan.files_scanned,
        }),
        scan.failures,
    ))
}

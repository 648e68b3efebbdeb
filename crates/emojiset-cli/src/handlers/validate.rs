//! Validate command handler.

use anyhow::Result;
use emojiset_core::validate;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{display_issues, display_stats};

/// Execute the validate command.
///
/// Prints dataset statistics followed by every consistency issue.
///
/// # Errors
///
/// Returns [`CliError::Invalid`] when at least one issue was found, or the
/// load error when the dataset cannot be read.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let set = ctx.load_dataset()?;
    display_stats(&set.stats());

    let report = validate(&set);
    if report.is_valid() {
        println!("\nDataset is valid.");
        return Ok(());
    }

    println!("\nFound {} issue(s):", report.len());
    display_issues(report.issues());
    Err(CliError::Invalid {
        issues: report.len(),
    }
    .into())
}

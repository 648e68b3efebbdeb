//! Sanitize command handler.
//!
//! Strips the dataset down to the emoji the chosen support port accepts
//! and writes the result to a new file.

use std::path::PathBuf;

use anyhow::Result;
use emojiset_core::{SanitizeOptions, sanitize, validate};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::truncate_string;

/// Arguments for the sanitize command.
#[derive(Debug, Clone)]
pub struct SanitizeArgs {
    pub output: PathBuf,
    pub allow_list: Option<PathBuf>,
    pub drop_empty_categories: bool,
    pub pretty: bool,
}

/// Execute the sanitize command.
pub fn execute(ctx: &CliContext, args: &SanitizeArgs) -> Result<()> {
    let set = ctx.load_dataset()?;
    let support = ctx.support(args.allow_list.as_deref())?;

    let options = SanitizeOptions::new().with_drop_empty_categories(args.drop_empty_categories);
    let outcome = sanitize(set, support.as_ref(), options);

    let report = validate(&outcome.set);
    if !report.is_valid() {
        tracing::warn!(
            issues = report.len(),
            "Sanitized dataset has consistency issues carried over from the input"
        );
    }

    outcome
        .set
        .save(&args.output, args.pretty)
        .map_err(CliError::from)?;

    println!(
        "Wrote {} emoji(s) to {}",
        outcome.set.emojis.len(),
        args.output.display()
    );
    println!("  Removed emojis: {}", outcome.removed.len());
    println!("  Rewritten skins: {}", outcome.rewritten_skins);
    println!("  Dropped skins: {}", outcome.dropped_skins);
    if !outcome.dropped_categories.is_empty() {
        println!(
            "  Dropped categories: {}",
            outcome.dropped_categories.join(", ")
        );
    }
    if !outcome.removed.is_empty() {
        println!(
            "  Removed: {}",
            truncate_string(&outcome.removed.join(", "), 200)
        );
    }

    Ok(())
}

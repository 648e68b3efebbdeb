//! Reaction command handler.

use std::path::Path;

use anyhow::Result;
use emojiset_core::validate_reaction_with;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the reaction command.
///
/// # Errors
///
/// Returns [`CliError::Rejected`] when `text` is not a single supported
/// emoji.
pub fn execute(ctx: &CliContext, text: &str, allow_list: Option<&Path>) -> Result<()> {
    let support = ctx.support(allow_list)?;

    match validate_reaction_with(support.as_ref(), text) {
        Ok(()) => {
            println!("'{text}' is a valid reaction");
            Ok(())
        }
        Err(e) => {
            tracing::debug!(reaction = text, error = %e, "Reaction rejected");
            Err(CliError::Rejected(e.to_string()).into())
        }
    }
}

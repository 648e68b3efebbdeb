//! Show command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_emoji;

/// Execute the show command.
///
/// `short_code` may be an alias; it is resolved to the emoji it points at.
pub fn execute(ctx: &CliContext, short_code: &str, json: bool) -> Result<()> {
    let set = ctx.load_dataset()?;

    let canonical = set
        .canonical(short_code)
        .ok_or_else(|| CliError::Arguments(format!("unknown short-code '{short_code}'")))?;
    let emoji = set
        .resolve(canonical)
        .ok_or_else(|| CliError::Arguments(format!("unknown short-code '{short_code}'")))?;

    if json {
        println!("{}", serde_json::to_string_pretty(emoji)?);
        return Ok(());
    }

    let mut aliases: Vec<&str> = set.aliases_of(canonical).collect();
    aliases.sort_unstable();
    display_emoji(canonical, emoji, &aliases);
    Ok(())
}

//! Stats command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::display_stats;

/// Execute the stats command.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let stats = ctx.load_dataset()?.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        display_stats(&stats);
    }
    Ok(())
}

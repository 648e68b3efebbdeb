//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that load input through the context, call into
//!   `emojiset-core` and format output for the terminal.
//!
//! Failures that should change the exit status are returned as
//! [`CliError`](crate::CliError) values.

pub mod categories;
pub mod reaction;
pub mod sanitize;
pub mod show;
pub mod stats;
pub mod validate;

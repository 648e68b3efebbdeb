//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for working with emoji-mart dataset files.
#[derive(Parser, Debug)]
#[command(name = "emojiset")]
#[command(about = "Validate, inspect and sanitize emoji-mart datasets")]
#[command(version)]
pub struct Cli {
    /// Dataset file to operate on (overrides EMOJISET_DATA)
    #[arg(long = "data", global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

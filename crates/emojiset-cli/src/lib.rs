//! Command-line interface for emoji-mart datasets.
//!
//! The `emojiset` binary loads a dataset file and runs the operations from
//! `emojiset-core` on it: validation, sanitizing against a supported-emoji
//! list, single-emoji lookup and reaction checks.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary entry point
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::{CliError, exit_code};
pub use parser::Cli;

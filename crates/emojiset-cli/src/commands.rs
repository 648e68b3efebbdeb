//! Subcommands of the `emojiset` binary.

use std::path::PathBuf;

use clap::Subcommand;

/// Available dataset operations.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check cross-references and sprite-sheet consistency
    Validate,

    /// Restrict the dataset to supported emoji and write the result
    Sanitize {
        /// Where to write the sanitized dataset
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
        /// Supported-emoji list, one emoji or codepoint sequence per line
        /// (overrides EMOJISET_ALLOW_LIST; defaults to the Unicode table)
        #[arg(long, value_name = "PATH")]
        allow_list: Option<PathBuf>,
        /// Remove categories left without emojis
        #[arg(long)]
        drop_empty_categories: bool,
        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Check that a string is exactly one supported emoji
    Reaction {
        /// The reaction text
        text: String,
        /// Supported-emoji list (overrides EMOJISET_ALLOW_LIST)
        #[arg(long, value_name = "PATH")]
        allow_list: Option<PathBuf>,
    },

    /// Show one emoji by short-code or alias
    Show {
        /// Short-code or alias, e.g. "thumbsup"
        short_code: String,
        /// Print the emoji entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print dataset statistics
    Stats {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories with their member counts
    Categories,
}

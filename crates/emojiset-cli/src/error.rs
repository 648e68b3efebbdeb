//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `EmojiSetError` to exit codes and user-facing messages.

use emojiset_core::EmojiSetError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error (missing dataset path, unknown short-code).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// The dataset or allow list could not be decoded.
    #[error("Data error: {0}")]
    Data(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation found consistency issues.
    #[error("Dataset has {issues} issue(s)")]
    Invalid { issues: usize },

    /// A reaction was rejected.
    #[error("Rejected: {0}")]
    Rejected(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error (invalid dataset, rejected reaction)
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Invalid { .. } | Self::Rejected(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Data(_) => 65,     // EX_DATAERR
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<EmojiSetError> for CliError {
    fn from(err: EmojiSetError) -> Self {
        match err {
            EmojiSetError::Io { .. } => Self::Io(err.to_string()),
            EmojiSetError::Json(_) | EmojiSetError::Codepoint(_) => Self::Data(err.to_string()),
            EmojiSetError::Invalid { count, .. } => Self::Invalid { issues: count },
            EmojiSetError::AllowList { .. } => Self::Config(err.to_string()),
        }
    }
}

/// Exit code for an error returned by a handler.
///
/// Errors that are neither a [`CliError`] nor an [`EmojiSetError`] map to 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    match err.downcast_ref::<EmojiSetError>() {
        Some(EmojiSetError::Io { .. }) => 74,
        Some(EmojiSetError::Json(_) | EmojiSetError::Codepoint(_)) => 65,
        Some(EmojiSetError::AllowList { .. }) => 78,
        Some(EmojiSetError::Invalid { .. }) | None => 1,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use emojiset_core::{AllowListError, CodepointError};

    use super::*;

    fn allow_list_error() -> EmojiSetError {
        EmojiSetError::AllowList {
            path: PathBuf::from("allow.txt"),
            source: AllowListError {
                line: 1,
                source: CodepointError::Empty,
            },
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Data("x".into()).exit_code(), 65);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
        assert_eq!(CliError::Invalid { issues: 2 }.exit_code(), 1);
        assert_eq!(CliError::Rejected("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_from_core_json_error() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CliError::from(EmojiSetError::from(json));
        assert!(matches!(err, CliError::Data(_)));
    }

    #[test]
    fn test_from_core_allow_list_error() {
        let err = CliError::from(allow_list_error());
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("allow.txt"));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_exit_code_through_anyhow() {
        let err = anyhow::Error::new(CliError::Arguments("no dataset".into()));
        assert_eq!(exit_code(&err), 2);

        let err = anyhow::Error::new(allow_list_error());
        assert_eq!(exit_code(&err), 78);

        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
    }
}

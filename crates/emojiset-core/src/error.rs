//! Error types for dataset operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::CodepointError;

/// Result type alias for dataset operations.
pub type EmojiSetResult<T> = Result<T, EmojiSetError>;

/// Errors loading, saving or checking an emoji dataset.
#[derive(Debug, Error)]
pub enum EmojiSetError {
    /// Reading or writing a dataset file failed.
    #[error("Failed to access {path}: {source}")]
    Io {
        /// The file involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document does not match the dataset shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `unified` codepoint string could not be decoded.
    #[error("Invalid codepoints: {0}")]
    Codepoint(#[from] CodepointError),

    /// The dataset decoded but breaks one or more consistency rules.
    #[error("Dataset is inconsistent ({count} issue(s)), first: {first}")]
    Invalid {
        /// Total number of issues found
        count: usize,
        /// Description of the first issue
        first: String,
    },

    /// An allow-list file could not be used.
    #[error("Invalid allow list {path}: {source}")]
    AllowList {
        /// The allow-list file
        path: PathBuf,
        /// The offending line
        #[source]
        source: AllowListError,
    },
}

/// A line of an allow list that names no emoji.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct AllowListError {
    /// 1-based line number
    pub line: usize,
    /// Why the codepoints on that line could not be decoded
    #[source]
    pub source: CodepointError,
}

impl EmojiSetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

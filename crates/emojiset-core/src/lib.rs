//! Typed model of the emoji-mart emoji dataset.
//!
//! The dataset is a single JSON document with four top-level keys:
//! `categories`, `emojis`, `aliases` and `sheet`. [`EmojiMartSet`] decodes
//! it into statically typed fields and re-encodes it without loss.
//!
//! On top of the data model this crate provides:
//!
//! - [`validate`] - cross-reference and sprite-sheet consistency checks
//! - [`sanitize`] - restrict a dataset to the emoji a backend supports
//! - [`validate_reaction`] - accept a string only if it is one supported emoji
//!
//! Which emoji count as supported is decided by the [`EmojiSupport`] port;
//! [`UnicodeEmojiSupport`] and [`AllowList`] are the bundled implementations.

#![deny(unused_crate_dependencies)]

pub mod domain;
mod error;
pub mod ports;
mod reaction;
mod sanitize;
mod support;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    Category, CodepointError, Codepoints, DatasetStats, Emoji, EmojiMartSet, Keyword, Sheet,
    ShortCode, Skin, Version,
};
pub use error::{AllowListError, EmojiSetError, EmojiSetResult};
pub use ports::{AllowList, EmojiSupport};
pub use reaction::{ReactionError, validate_reaction, validate_reaction_with};
pub use sanitize::{
    SanitizeOptions, SanitizeOutcome, SkinFilter, find_incompatible, remove_emojis, sanitize,
};
pub use support::UnicodeEmojiSupport;
pub use validation::{Issue, ValidationReport, validate};


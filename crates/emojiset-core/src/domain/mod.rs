//! Dataset domain types.
//!
//! These types mirror the emoji-mart JSON document one-to-one and are pure
//! data: decoding, encoding and a few read-only accessors.
//!
//! # Structure
//!
//! - `set` - The dataset root (`EmojiMartSet`), categories and sprite sheet
//! - `emoji` - Per-emoji records, keywords, versions and skins
//! - `codepoints` - The hex `unified` codepoint encoding

mod codepoints;
mod emoji;
mod set;

pub use codepoints::{CodepointError, Codepoints};
pub use emoji::{Emoji, Keyword, Skin, Version};
pub use set::{Category, DatasetStats, EmojiMartSet, Sheet, ShortCode};

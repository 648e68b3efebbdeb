//! Per-emoji records.
//!
//! The upstream data is not perfectly uniform: a handful of entries carry
//! untyped keyword lists and some versions are fractional (`13.1`). Both are
//! modelled as explicit sum types so irregular entries decode without being
//! silently coerced.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::codepoints::Codepoints;

/// One emoji under its short-code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emoji {
    /// Identifier, normally equal to the short-code it is stored under.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// ASCII emoticons that map to this emoji (`":)"`), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoticons: Option<Vec<String>>,
    /// Search keywords.
    pub keywords: Vec<Keyword>,
    /// Skin tone variants. The first entry is the default rendering.
    pub skins: Vec<Skin>,
    /// Emoji version the emoji was introduced in.
    pub version: Version,
}

impl Emoji {
    /// The default skin, i.e. the first one.
    pub fn default_skin(&self) -> Option<&Skin> {
        self.skins.first()
    }

    /// The default rendered form.
    pub fn native(&self) -> Option<&str> {
        self.default_skin().map(|skin| skin.native.as_str())
    }

    /// Keywords that are plain text, skipping irregular entries.
    pub fn text_keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().filter_map(Keyword::as_text)
    }

    /// Whether any skin renders as `native`.
    pub fn has_native(&self, native: &str) -> bool {
        self.skins.iter().any(|skin| skin.native == native)
    }
}

/// A search keyword.
///
/// Almost always text; anything else found in the data is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keyword {
    Text(String),
    Other(serde_json::Value),
}

impl Keyword {
    /// The keyword text, if this entry is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for Keyword {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Emoji version number, whole (`14`) or fractional (`13.1`).
///
/// Re-encodes with the same representation it was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Version {
    Integer(u64),
    Decimal(f64),
}

impl Version {
    /// Numeric value for comparisons.
    #[allow(clippy::cast_precision_loss)] // versions are small
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(v) => v as f64,
            Self::Decimal(v) => v,
        }
    }

    /// True when the version was written as a decimal.
    pub const fn is_decimal(self) -> bool {
        matches!(self, Self::Decimal(_))
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::Integer(1)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
        }
    }
}

/// A skin tone variant of an emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skin {
    /// Codepoint sequence (`"1f44d-1f3fb"`).
    pub unified: Codepoints,
    /// The rendered text.
    pub native: String,
    /// Sprite sheet column, present in sprite-sheet datasets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<u32>,
    /// Sprite sheet row, present in sprite-sheet datasets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<u32>,
}

impl Skin {
    /// Build a skin from its rendered text, deriving `unified`.
    pub fn from_native(native: impl Into<String>) -> Self {
        let native = native.into();
        Self {
            unified: Codepoints::from_native(&native),
            native,
            x: None,
            y: None,
        }
    }

    /// Sprite cell as `(x, y)` when both coordinates are present.
    pub const fn cell(&self) -> Option<(u32, u32)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}

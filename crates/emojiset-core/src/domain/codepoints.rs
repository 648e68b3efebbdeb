//! Unicode codepoint sequences as written in emoji-mart's `unified` field.
//!
//! The dataset stores each skin's codepoints as lowercase hex scalars joined
//! by hyphens (`"1f3c3-200d-2642-fe0f"`). This newtype keeps the textual
//! form for lossless round-trips and converts to and from the rendered
//! string on demand.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between scalars in a `unified` string.
const SEPARATOR: char = '-';

/// Errors decoding a `unified` codepoint string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodepointError {
    /// The sequence contains no scalars.
    #[error("codepoint sequence is empty")]
    Empty,

    /// A segment is not valid hexadecimal.
    #[error("invalid hex segment '{segment}' in '{sequence}'")]
    InvalidHex { sequence: String, segment: String },

    /// A segment is hex but not a Unicode scalar value (e.g. a surrogate).
    #[error("U+{value:X} in '{sequence}' is not a Unicode scalar value")]
    InvalidScalar { sequence: String, value: u32 },
}

/// A hyphen-separated hex codepoint sequence, e.g. `"1f600"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Codepoints(String);

impl Codepoints {
    /// Wrap a `unified` string without checking it.
    pub fn new(unified: impl Into<String>) -> Self {
        Self(unified.into())
    }

    /// Encode a rendered emoji string as a codepoint sequence.
    ///
    /// ```
    /// use emojiset_core::Codepoints;
    ///
    /// assert_eq!(Codepoints::from_native("😀").as_str(), "1f600");
    /// assert_eq!(Codepoints::from_native("❤️").as_str(), "2764-fe0f");
    /// ```
    pub fn from_native(native: &str) -> Self {
        let unified = native
            .chars()
            .map(|c| format!("{:x}", u32::from(c)))
            .collect::<Vec<_>>()
            .join("-");
        Self(unified)
    }

    /// The raw `unified` text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode to the rendered emoji string.
    pub fn to_native(&self) -> Result<String, CodepointError> {
        if self.0.trim().is_empty() {
            return Err(CodepointError::Empty);
        }

        self.0
            .split(SEPARATOR)
            .map(|segment| {
                let invalid_hex = || CodepointError::InvalidHex {
                    sequence: self.0.clone(),
                    segment: segment.to_string(),
                };
                // from_str_radix alone would accept a leading '+'
                if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(invalid_hex());
                }
                let value = u32::from_str_radix(segment, 16).map_err(|_| invalid_hex())?;
                char::from_u32(value).ok_or_else(|| CodepointError::InvalidScalar {
                    sequence: self.0.clone(),
                    value,
                })
            })
            .collect()
    }

    /// Number of scalars in the sequence.
    pub fn len(&self) -> usize {
        if self.0.is_empty() {
            0
        } else {
            self.0.split(SEPARATOR).count()
        }
    }

    /// True when the sequence holds no scalars.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Codepoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Codepoints {
    fn from(unified: &str) -> Self {
        Self::new(unified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_scalar_to_native() {
        assert_eq!(Codepoints::new("1f600").to_native().unwrap(), "😀");
    }

    #[test]
    fn test_zwj_sequence_to_native() {
        let runner = Codepoints::new("1f3c3-200d-2642-fe0f");
        assert_eq!(runner.to_native().unwrap(), "\u{1f3c3}\u{200d}\u{2642}\u{fe0f}");
        assert_eq!(runner.len(), 4);
    }

    #[test]
    fn test_uppercase_hex_is_accepted() {
        assert_eq!(Codepoints::new("1F600").to_native().unwrap(), "😀");
    }

    #[test]
    fn test_from_native_is_lowercase() {
        let cp = Codepoints::from_native("\u{1f44d}\u{1f3fd}");
        assert_eq!(cp.as_str(), "1f44d-1f3fd");
        assert_eq!(cp.to_string(), "1f44d-1f3fd");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(Codepoints::new("").to_native(), Err(CodepointError::Empty));
        assert!(Codepoints::new("").is_empty());
        assert_eq!(Codepoints::new("").len(), 0);
    }

    #[test]
    fn test_invalid_hex_segment() {
        let err = Codepoints::new("1f600-zz").to_native().unwrap_err();
        assert!(matches!(err, CodepointError::InvalidHex { ref segment, .. } if segment == "zz"));
        assert!(err.to_string().contains("1f600-zz"));
    }

    #[test]
    fn test_trailing_separator_is_invalid() {
        let err = Codepoints::new("1f600-").to_native().unwrap_err();
        assert!(matches!(err, CodepointError::InvalidHex { .. }));
    }

    #[test]
    fn test_sign_prefix_is_invalid() {
        for unified in ["+1f600", "1f44d-+1f3fd", "-1f600"] {
            let err = Codepoints::new(unified).to_native().unwrap_err();
            assert!(
                matches!(err, CodepointError::InvalidHex { .. }),
                "{unified}: {err:?}"
            );
        }
    }

    #[test]
    fn test_surrogate_is_not_a_scalar() {
        let err = Codepoints::new("d800").to_native().unwrap_err();
        assert_eq!(
            err,
            CodepointError::InvalidScalar {
                sequence: "d800".to_string(),
                value: 0xd800,
            }
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let cp = Codepoints::new("2764-fe0f");
        assert_eq!(serde_json::to_string(&cp).unwrap(), "\"2764-fe0f\"");
        let back: Codepoints = serde_json::from_str("\"2764-fe0f\"").unwrap();
        assert_eq!(back, cp);
    }
}

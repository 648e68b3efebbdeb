//! Unicode emoji table implementation of [`EmojiSupport`].

use crate::ports::{EmojiSupport, presentation_variants};

/// Supports every emoji in the Unicode emoji table bundled by the `emojis`
/// crate, including skin tone variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmojiSupport;

impl UnicodeEmojiSupport {
    /// Create the default support table.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EmojiSupport for UnicodeEmojiSupport {
    fn lookup(&self, native: &str) -> Option<String> {
        if native.is_empty() {
            return None;
        }
        presentation_variants(native)
            .iter()
            .find_map(|candidate| emojis::get(candidate))
            .map(|emoji| emoji.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_emoji_is_supported() {
        let support = UnicodeEmojiSupport::new();
        assert_eq!(support.lookup("😀"), Some("😀".to_string()));
        assert!(support.lookup("🦀").is_some());
    }

    #[test]
    fn test_skin_tone_is_supported() {
        assert!(UnicodeEmojiSupport.lookup("👍🏽").is_some());
    }

    #[test]
    fn test_unqualified_heart_is_supported() {
        let support = UnicodeEmojiSupport;
        let canonical = support.lookup("❤").unwrap();
        assert_eq!(canonical.trim_end_matches('\u{fe0f}'), "❤");
    }

    #[test]
    fn test_text_is_not_supported() {
        let support = UnicodeEmojiSupport;
        assert!(support.lookup("a").is_none());
        assert!(support.lookup("hello").is_none());
        assert!(support.lookup("").is_none());
    }
}

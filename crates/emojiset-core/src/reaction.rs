//! Reaction validation.
//!
//! A reaction is accepted only when it is exactly one emoji that the
//! receiving side supports: no surrounding text, no second emoji.

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::ports::EmojiSupport;
use crate::support::UnicodeEmojiSupport;

/// Why a reaction was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReactionError {
    /// The reaction is the empty string.
    #[error("reaction is empty")]
    Empty,

    /// The reaction renders as more than one character.
    #[error("reaction must be a single emoji, found {graphemes} characters")]
    NotSingleEmoji { graphemes: usize },

    /// The reaction is a single character but not a supported emoji.
    #[error("reaction '{0}' is not a supported emoji")]
    Unsupported(String),
}

/// Validate a reaction against the Unicode emoji table.
///
/// ```
/// use emojiset_core::{ReactionError, validate_reaction};
///
/// assert!(validate_reaction("👍").is_ok());
/// assert_eq!(validate_reaction(""), Err(ReactionError::Empty));
/// assert!(validate_reaction("👍👍").is_err());
/// ```
pub fn validate_reaction(reaction: &str) -> Result<(), ReactionError> {
    validate_reaction_with(&UnicodeEmojiSupport, reaction)
}

/// Validate a reaction against the given support port.
pub fn validate_reaction_with(
    support: &dyn EmojiSupport,
    reaction: &str,
) -> Result<(), ReactionError> {
    if reaction.is_empty() {
        return Err(ReactionError::Empty);
    }

    let graphemes = reaction.graphemes(true).count();
    if graphemes != 1 {
        return Err(ReactionError::NotSingleEmoji { graphemes });
    }

    if support.lookup(reaction).is_none() {
        return Err(ReactionError::Unsupported(reaction.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{AllowList, MockEmojiSupport};

    #[test]
    fn test_single_emoji_is_valid() {
        assert_eq!(validate_reaction("😀"), Ok(()));
        assert_eq!(validate_reaction("❤️"), Ok(()));
    }

    #[test]
    fn test_zwj_sequence_is_one_grapheme() {
        // man running, ZWJ sequence
        assert_eq!(validate_reaction("\u{1f3c3}\u{200d}\u{2642}\u{fe0f}"), Ok(()));
    }

    #[test]
    fn test_skin_tone_is_one_grapheme() {
        assert_eq!(validate_reaction("👍🏿"), Ok(()));
    }

    #[test]
    fn test_empty_reaction() {
        assert_eq!(validate_reaction(""), Err(ReactionError::Empty));
    }

    #[test]
    fn test_two_emojis_rejected() {
        assert_eq!(
            validate_reaction("😀😀"),
            Err(ReactionError::NotSingleEmoji { graphemes: 2 })
        );
    }

    #[test]
    fn test_emoji_with_text_rejected() {
        assert_eq!(
            validate_reaction("ok👍"),
            Err(ReactionError::NotSingleEmoji { graphemes: 3 })
        );
    }

    #[test]
    fn test_plain_letter_rejected() {
        assert_eq!(
            validate_reaction("a"),
            Err(ReactionError::Unsupported("a".to_string()))
        );
    }

    #[test]
    fn test_allow_list_restricts_reactions() {
        let list = AllowList::new(["👍"]);
        assert_eq!(validate_reaction_with(&list, "👍"), Ok(()));
        assert!(matches!(
            validate_reaction_with(&list, "😀"),
            Err(ReactionError::Unsupported(_))
        ));
    }

    #[test]
    fn test_support_not_consulted_for_multiple_graphemes() {
        let mut support = MockEmojiSupport::new();
        support.expect_lookup().never();

        let result = validate_reaction_with(&support, "ab");
        assert_eq!(result, Err(ReactionError::NotSingleEmoji { graphemes: 2 }));
    }
}

//! Port definitions.
//!
//! Ports are the seams where the dataset logic meets something it does not
//! own. Implementations are injected by the caller.

mod emoji_support;

pub use emoji_support::{AllowList, EmojiSupport, VARIATION_SELECTOR_16, presentation_variants};

#[cfg(test)]
pub use emoji_support::MockEmojiSupport;

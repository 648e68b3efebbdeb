//! Dataset sanitizing.
//!
//! Strips a dataset down to the emoji a backend supports. Skins the support
//! port does not recognise are dropped, skins it knows under a different
//! presentation are rewritten to that form, and emojis left with no skins
//! are removed together with every category entry and alias that refers to
//! them. Cross-references that were consistent before sanitizing stay
//! consistent afterwards.

use std::collections::BTreeSet;

use crate::domain::{Codepoints, EmojiMartSet, ShortCode};
use crate::ports::EmojiSupport;

/// Options for [`sanitize`].
///
/// # Example
///
/// ```
/// use emojiset_core::SanitizeOptions;
///
/// let options = SanitizeOptions::new().with_drop_empty_categories(true);
/// assert!(options.drop_empty_categories);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Remove categories that end up with no emojis.
    pub drop_empty_categories: bool,
}

impl SanitizeOptions {
    /// Options with every extra step disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            drop_empty_categories: false,
        }
    }

    /// Set whether empty categories are removed.
    #[must_use]
    pub const fn with_drop_empty_categories(mut self, drop: bool) -> Self {
        self.drop_empty_categories = drop;
        self
    }
}

/// Result of [`sanitize`].
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizeOutcome {
    /// The sanitized dataset.
    pub set: EmojiMartSet,
    /// Short-codes of removed emojis, sorted.
    pub removed: Vec<ShortCode>,
    /// Number of skins rewritten to the supported presentation.
    pub rewritten_skins: usize,
    /// Number of skins dropped from emojis that were kept.
    pub dropped_skins: usize,
    /// Ids of categories removed because they became empty.
    pub dropped_categories: Vec<String>,
}

/// Per-emoji skin filtering counts from [`find_incompatible`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkinFilter {
    /// Emojis with no supported skin left, sorted.
    pub incompatible: Vec<ShortCode>,
    /// Skins rewritten to the supported presentation.
    pub rewritten: usize,
    /// Unsupported skins dropped from emojis that keep at least one skin.
    pub dropped: usize,
}

/// Filter every emoji's skins through `support`.
///
/// Emojis that keep at least one skin are updated in place. Emojis whose
/// skins are all unsupported are left untouched and returned for removal.
pub fn find_incompatible(set: &mut EmojiMartSet, support: &dyn EmojiSupport) -> SkinFilter {
    let mut filter = SkinFilter::default();

    for (short_code, emoji) in &mut set.emojis {
        let mut kept = Vec::with_capacity(emoji.skins.len());
        let mut rewritten = 0;

        for skin in &emoji.skins {
            match support.lookup(&skin.native) {
                Some(supported) if supported == skin.native => kept.push(skin.clone()),
                Some(supported) => {
                    tracing::trace!(
                        emoji = %short_code,
                        from = %skin.unified,
                        to = %Codepoints::from_native(&supported),
                        "Rewrote skin codepoints"
                    );
                    let mut skin = skin.clone();
                    skin.unified = Codepoints::from_native(&supported);
                    skin.native = supported;
                    kept.push(skin);
                    rewritten += 1;
                }
                None => {
                    tracing::trace!(
                        emoji = %short_code,
                        codepoints = %skin.unified,
                        "Dropped unsupported skin"
                    );
                }
            }
        }

        if kept.is_empty() {
            filter.incompatible.push(short_code.clone());
        } else {
            filter.dropped += emoji.skins.len() - kept.len();
            filter.rewritten += rewritten;
            emoji.skins = kept;
        }
    }

    filter
}

/// Remove emojis along with their category entries and aliases.
///
/// Category order is preserved.
pub fn remove_emojis(set: &mut EmojiMartSet, short_codes: &[ShortCode]) {
    let removed: BTreeSet<&str> = short_codes.iter().map(String::as_str).collect();

    set.emojis
        .retain(|short_code, _| !removed.contains(short_code.as_str()));

    for category in &mut set.categories {
        category
            .emojis
            .retain(|short_code| !removed.contains(short_code.as_str()));
    }

    set.aliases
        .retain(|_, target| !removed.contains(target.as_str()));
}

/// Sanitize a dataset against `support`.
pub fn sanitize(
    mut set: EmojiMartSet,
    support: &dyn EmojiSupport,
    options: SanitizeOptions,
) -> SanitizeOutcome {
    let before = set.emojis.len();
    let filter = find_incompatible(&mut set, support);
    remove_emojis(&mut set, &filter.incompatible);

    let mut dropped_categories = Vec::new();
    if options.drop_empty_categories {
        set.categories.retain(|category| {
            if category.emojis.is_empty() {
                dropped_categories.push(category.id.clone());
                false
            } else {
                true
            }
        });
    }

    tracing::info!(
        emojis_before = before,
        emojis_after = set.emojis.len(),
        removed = filter.incompatible.len(),
        rewritten_skins = filter.rewritten,
        dropped_skins = filter.dropped,
        "Sanitized emoji dataset"
    );

    SanitizeOutcome {
        set,
        removed: filter.incompatible,
        rewritten_skins: filter.rewritten,
        dropped_skins: filter.dropped,
        dropped_categories,
    }
}

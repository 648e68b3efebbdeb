//! Supported-emoji port.
//!
//! Sanitizing and reaction validation both need to know which emoji the
//! receiving side can display. This port abstracts that decision so the
//! Unicode table, a backend-provided allow list, or a mock can be injected.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::Codepoints;
use crate::error::{AllowListError, EmojiSetError, EmojiSetResult};

/// U+FE0F VARIATION SELECTOR-16, requests emoji presentation.
pub const VARIATION_SELECTOR_16: char = '\u{fe0f}';

/// Port deciding whether a rendered emoji is supported.
#[cfg_attr(test, mockall::automock)]
pub trait EmojiSupport: Send + Sync {
    /// Look up a rendered emoji.
    ///
    /// Returns the supported form of `native` (which may differ from the
    /// input only in variation selectors), or `None` when unsupported.
    fn lookup(&self, native: &str) -> Option<String>;
}

/// Forms of `native` that render identically: as given, without any
/// U+FE0F, and with U+FE0F after the first scalar.
pub fn presentation_variants(native: &str) -> Vec<String> {
    let mut variants = vec![native.to_string()];

    let stripped = strip_variation_selectors(native);
    if stripped != native {
        variants.push(stripped.clone());
    }

    let mut chars = stripped.chars();
    if let Some(first) = chars.next() {
        let qualified: String = std::iter::once(first)
            .chain(std::iter::once(VARIATION_SELECTOR_16))
            .chain(chars)
            .collect();
        if !variants.contains(&qualified) {
            variants.push(qualified);
        }
    }

    variants
}

fn strip_variation_selectors(native: &str) -> String {
    native
        .chars()
        .filter(|&c| c != VARIATION_SELECTOR_16)
        .collect()
}

/// A fixed set of supported emoji.
///
/// Matching ignores U+FE0F; lookups return the form the list was built
/// with.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    by_stripped: HashMap<String, String>,
}

impl AllowList {
    /// Build from rendered emoji strings.
    pub fn new<I, S>(natives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let by_stripped = natives
            .into_iter()
            .map(Into::into)
            .map(|native| (strip_variation_selectors(&native), native))
            .collect();
        Self { by_stripped }
    }

    /// Parse an allow list: one emoji per line, either rendered (`😀`) or as
    /// a `unified` codepoint sequence (`1f600`). Blank lines and comment
    /// lines are ignored. A comment is `#` alone or `#` followed by
    /// whitespace, so the keycap `#️⃣` is still an entry.
    pub fn parse(text: &str) -> Result<Self, AllowListError> {
        let mut natives = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || is_comment(line) {
                continue;
            }
            if looks_like_codepoints(line) {
                let native = Codepoints::new(line)
                    .to_native()
                    .map_err(|source| AllowListError {
                        line: index + 1,
                        source,
                    })?;
                natives.push(native);
            } else {
                natives.push(line.to_string());
            }
        }
        Ok(Self::new(natives))
    }

    /// Load an allow-list file (see [`AllowList::parse`]).
    pub fn load(path: &Path) -> EmojiSetResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| EmojiSetError::io(path, e))?;
        let list = Self::parse(&text).map_err(|source| EmojiSetError::AllowList {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), entries = list.len(), "Loaded allow list");
        Ok(list)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.by_stripped.len()
    }

    /// True when the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.by_stripped.is_empty()
    }
}

fn is_comment(line: &str) -> bool {
    line.strip_prefix('#')
        .is_some_and(|rest| rest.chars().next().is_none_or(char::is_whitespace))
}

fn looks_like_codepoints(line: &str) -> bool {
    line.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
}

impl EmojiSupport for AllowList {
    fn lookup(&self, native: &str) -> Option<String> {
        self.by_stripped
            .get(&strip_variation_selectors(native))
            .cloned()
    }
}

//! Dataset consistency checks.
//!
//! The JSON shape alone does not guarantee that aliases and categories point
//! at real emojis or that the sprite sheet is large enough. [`validate`]
//! walks the whole dataset and reports every problem it finds instead of
//! stopping at the first.

use std::fmt;

use crate::domain::{CodepointError, EmojiMartSet, ShortCode};
use crate::error::{EmojiSetError, EmojiSetResult};

/// A single consistency problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// An alias targets a short-code that has no emoji.
    DanglingAlias { alias: ShortCode, target: ShortCode },

    /// A category lists a short-code that has no emoji.
    UnknownCategoryMember { category: String, short_code: ShortCode },

    /// The sprite sheet has fewer cells than the dataset has skins.
    SheetTooSmall { capacity: u64, required: u64 },

    /// A skin's sprite cell lies outside the sheet grid.
    SkinOutsideSheet { short_code: ShortCode, x: u32, y: u32 },

    /// An emoji's `id` differs from the short-code it is stored under.
    IdMismatch { short_code: ShortCode, id: String },

    /// A skin's `unified` codepoints cannot be decoded.
    MalformedCodepoints { short_code: ShortCode, error: CodepointError },

    /// A skin's `native` text differs from its decoded `unified` codepoints.
    NativeMismatch { short_code: ShortCode, unified: String, native: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingAlias { alias, target } => {
                write!(f, "alias '{alias}' points at missing emoji '{target}'")
            }
            Self::UnknownCategoryMember {
                category,
                short_code,
            } => write!(f, "category '{category}' lists missing emoji '{short_code}'"),
            Self::SheetTooSmall { capacity, required } => write!(
                f,
                "sprite sheet has {capacity} cell(s) but {required} skin(s) need one"
            ),
            Self::SkinOutsideSheet { short_code, x, y } => {
                write!(f, "skin of '{short_code}' at ({x}, {y}) is outside the sheet")
            }
            Self::IdMismatch { short_code, id } => {
                write!(f, "emoji stored as '{short_code}' has id '{id}'")
            }
            Self::MalformedCodepoints { short_code, error } => {
                write!(f, "skin of '{short_code}': {error}")
            }
            Self::NativeMismatch {
                short_code,
                unified,
                native,
            } => write!(
                f,
                "skin of '{short_code}' has unified '{unified}' but native '{native}'"
            ),
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    /// True when no issues were found.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// All issues in discovery order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// True when no issues were found.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// `Ok(())` for a clean report, `EmojiSetError::Invalid` otherwise.
    pub fn into_result(self) -> EmojiSetResult<()> {
        match self.issues.first() {
            None => Ok(()),
            Some(first) => Err(EmojiSetError::Invalid {
                count: self.issues.len(),
                first: first.to_string(),
            }),
        }
    }
}

/// Check every cross-reference and sheet constraint of a dataset.
///
/// # Example
///
/// ```
/// use emojiset_core::{EmojiMartSet, validate};
///
/// let set = EmojiMartSet::from_json_str(r#"{
///     "categories": [{"id": "people", "emojis": ["grinning"]}],
///     "emojis": {},
///     "aliases": {},
///     "sheet": {"cols": 1, "rows": 1}
/// }"#).unwrap();
///
/// let report = validate(&set);
/// assert_eq!(report.len(), 1);
/// ```
pub fn validate(set: &EmojiMartSet) -> ValidationReport {
    let mut issues = Vec::new();

    check_aliases(set, &mut issues);
    check_categories(set, &mut issues);
    check_emojis(set, &mut issues);
    check_sheet(set, &mut issues);

    tracing::debug!(issues = issues.len(), "Validated emoji dataset");
    ValidationReport { issues }
}

fn check_aliases(set: &EmojiMartSet, issues: &mut Vec<Issue>) {
    for (alias, target) in &set.aliases {
        if !set.emojis.contains_key(target) {
            issues.push(Issue::DanglingAlias {
                alias: alias.clone(),
                target: target.clone(),
            });
        }
    }
}

fn check_categories(set: &EmojiMartSet, issues: &mut Vec<Issue>) {
    for category in &set.categories {
        for short_code in &category.emojis {
            if !set.emojis.contains_key(short_code) {
                issues.push(Issue::UnknownCategoryMember {
                    category: category.id.clone(),
                    short_code: short_code.clone(),
                });
            }
        }
    }
}

fn check_emojis(set: &EmojiMartSet, issues: &mut Vec<Issue>) {
    for (short_code, emoji) in &set.emojis {
        if &emoji.id != short_code {
            issues.push(Issue::IdMismatch {
                short_code: short_code.clone(),
                id: emoji.id.clone(),
            });
        }

        for skin in &emoji.skins {
            match skin.unified.to_native() {
                Ok(decoded) if decoded != skin.native => issues.push(Issue::NativeMismatch {
                    short_code: short_code.clone(),
                    unified: skin.unified.to_string(),
                    native: skin.native.clone(),
                }),
                Ok(_) => {}
                Err(error) => issues.push(Issue::MalformedCodepoints {
                    short_code: short_code.clone(),
                    error,
                }),
            }

            if let Some((x, y)) = skin.cell() {
                if !set.sheet.contains(x, y) {
                    issues.push(Issue::SkinOutsideSheet {
                        short_code: short_code.clone(),
                        x,
                        y,
                    });
                }
            }
        }
    }
}

fn check_sheet(set: &EmojiMartSet, issues: &mut Vec<Issue>) {
    let capacity = set.sheet.capacity();
    let required = set.skin_count() as u64;
    if capacity < required {
        issues.push(Issue::SheetTooSmall { capacity, required });
    }
}

//! The top-level emoji-mart dataset.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::emoji::Emoji;
use crate::error::{EmojiSetError, EmojiSetResult};

/// Lowercase short-code used as the key of an emoji (`"grinning"`).
pub type ShortCode = String;

/// A full emoji-mart dataset.
///
/// Decodes from the JSON document with top-level `categories`, `emojis`,
/// `aliases` and `sheet` keys. Absent keys decode to their empty value.
/// Nothing here enforces cross-references; see
/// [`crate::validation::validate`] for that.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiMartSet {
    /// Picker categories in display order.
    pub categories: Vec<Category>,
    /// Every emoji keyed by short-code.
    pub emojis: BTreeMap<ShortCode, Emoji>,
    /// Alternate short-codes mapped to their canonical short-code.
    pub aliases: BTreeMap<ShortCode, ShortCode>,
    /// Sprite sheet grid dimensions.
    pub sheet: Sheet,
}

/// A picker category: an id plus ordered member short-codes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: String,
    pub emojis: Vec<ShortCode>,
}

/// Sprite sheet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sheet {
    pub cols: u32,
    pub rows: u32,
}

impl Sheet {
    /// Number of cells in the grid.
    pub const fn capacity(&self) -> u64 {
        self.cols as u64 * self.rows as u64
    }

    /// Whether `(x, y)` lies inside the grid.
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x < self.cols && y < self.rows
    }
}

/// Summary counts for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DatasetStats {
    pub categories: usize,
    pub emojis: usize,
    pub aliases: usize,
    pub skins: usize,
    pub sheet_capacity: u64,
}

impl EmojiMartSet {
    // =========================================================================
    // Decoding / encoding
    // =========================================================================

    /// Decode a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> EmojiSetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a dataset from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> EmojiSetResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decode a dataset from any reader.
    pub fn from_reader<R: Read>(reader: R) -> EmojiSetResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a dataset file.
    pub fn load(path: &Path) -> EmojiSetResult<Self> {
        let file = File::open(path).map_err(|e| EmojiSetError::io(path, e))?;
        let set = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            emojis = set.emojis.len(),
            categories = set.categories.len(),
            "Loaded emoji dataset"
        );
        Ok(set)
    }

    /// Encode as compact JSON.
    pub fn to_json_string(&self) -> EmojiSetResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON.
    pub fn to_json_string_pretty(&self) -> EmojiSetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the dataset to `path`, replacing any existing file.
    pub fn save(&self, path: &Path, pretty: bool) -> EmojiSetResult<()> {
        let file = File::create(path).map_err(|e| EmojiSetError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.flush().map_err(|e| EmojiSetError::io(path, e))?;
        tracing::debug!(path = %path.display(), "Saved emoji dataset");
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Canonical short-code for a short-code or alias.
    ///
    /// Returns `None` when neither an emoji nor an alias has this name.
    /// Aliases are followed a single hop.
    pub fn canonical<'a>(&'a self, short_code: &'a str) -> Option<&'a str> {
        if self.emojis.contains_key(short_code) {
            return Some(short_code);
        }
        self.aliases
            .get(short_code)
            .map(String::as_str)
            .filter(|target| self.emojis.contains_key(*target))
    }

    /// Emoji for a short-code or alias.
    pub fn resolve(&self, short_code: &str) -> Option<&Emoji> {
        self.canonical(short_code)
            .and_then(|canonical| self.emojis.get(canonical))
    }

    /// Aliases that point at `short_code`.
    pub fn aliases_of<'a>(&'a self, short_code: &'a str) -> impl Iterator<Item = &'a str> {
        self.aliases
            .iter()
            .filter(move |(_, target)| target.as_str() == short_code)
            .map(|(alias, _)| alias.as_str())
    }

    /// Category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Find the emoji whose skins include the rendered string `native`.
    pub fn find_native(&self, native: &str) -> Option<(&str, &Emoji)> {
        self.emojis
            .iter()
            .find(|(_, emoji)| emoji.has_native(native))
            .map(|(code, emoji)| (code.as_str(), emoji))
    }

    /// Total number of skins, i.e. sprite cells the dataset needs.
    pub fn skin_count(&self) -> usize {
        self.emojis.values().map(|emoji| emoji.skins.len()).sum()
    }

    /// Summary counts.
    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            categories: self.categories.len(),
            emojis: self.emojis.len(),
            aliases: self.aliases.len(),
            skins: self.skin_count(),
            sheet_capacity: self.sheet.capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Skin, Version};
    use tempfile::NamedTempFile;

    fn emoji(id: &str, native: &str) -> Emoji {
        Emoji {
            id: id.to_string(),
            name: id.replace('_', " "),
            emoticons: None,
            keywords: vec![],
            skins: vec![Skin::from_native(native)],
            version: Version::Integer(1),
        }
    }

    fn small_set() -> EmojiMartSet {
        let mut set = EmojiMartSet {
            sheet: Sheet { cols: 2, rows: 2 },
            ..Default::default()
        };
        set.emojis.insert("grinning".into(), emoji("grinning", "😀"));
        set.emojis.insert("thumbsup".into(), emoji("thumbsup", "👍"));
        set.aliases.insert("+1".into(), "thumbsup".into());
        set.aliases.insert("ghost_alias".into(), "missing".into());
        set.categories.push(Category {
            id: "people".into(),
            emojis: vec!["grinning".into(), "thumbsup".into()],
        });
        set
    }

    #[test]
    fn test_sheet_capacity_and_contains() {
        let sheet = Sheet { cols: 61, rows: 61 };
        assert_eq!(sheet.capacity(), 3721);
        assert!(sheet.contains(60, 0));
        assert!(!sheet.contains(61, 0));
        assert_eq!(Sheet::default().capacity(), 0);
    }

    #[test]
    fn test_sheet_capacity_does_not_overflow() {
        let sheet = Sheet {
            cols: u32::MAX,
            rows: u32::MAX,
        };
        assert_eq!(sheet.capacity(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_resolve_direct_and_alias() {
        let set = small_set();
        assert_eq!(set.resolve("grinning").map(|e| e.id.as_str()), Some("grinning"));
        assert_eq!(set.resolve("+1").map(|e| e.id.as_str()), Some("thumbsup"));
        assert_eq!(set.canonical("+1"), Some("thumbsup"));
        assert!(set.resolve("nope").is_none());
    }

    #[test]
    fn test_dangling_alias_does_not_resolve() {
        let set = small_set();
        assert_eq!(set.canonical("ghost_alias"), None);
        assert!(set.resolve("ghost_alias").is_none());
    }

    #[test]
    fn test_aliases_of() {
        let set = small_set();
        assert_eq!(set.aliases_of("thumbsup").collect::<Vec<_>>(), ["+1"]);
        assert_eq!(set.aliases_of("grinning").count(), 0);
    }

    #[test]
    fn test_find_native_and_category() {
        let set = small_set();
        let (code, _) = set.find_native("👍").unwrap();
        assert_eq!(code, "thumbsup");
        assert!(set.find_native("🦀").is_none());
        assert_eq!(set.category("people").map(|c| c.emojis.len()), Some(2));
        assert!(set.category("flags").is_none());
    }

    #[test]
    fn test_stats() {
        let stats = small_set().stats();
        assert_eq!(
            stats,
            DatasetStats {
                categories: 1,
                emojis: 2,
                aliases: 2,
                skins: 2,
                sheet_capacity: 4,
            }
        );
    }

    #[test]
    fn test_missing_top_level_keys_decode_empty() {
        let set = EmojiMartSet::from_json_str(r#"{"categories": [], "emojis": {}}"#).unwrap();
        assert!(set.aliases.is_empty());
        assert_eq!(set.sheet, Sheet::default());
        assert_eq!(set, EmojiMartSet::default());

        let set = EmojiMartSet::from_json_str(r#"{"sheet": {"cols": 4}}"#).unwrap();
        assert_eq!(set.sheet, Sheet { cols: 4, rows: 0 });
        assert!(set.emojis.is_empty());
    }

    #[test]
    fn test_wrong_top_level_type_is_an_error() {
        let result = EmojiMartSet::from_json_str(r#"{"categories": 5}"#);
        assert!(matches!(result, Err(EmojiSetError::Json(_))));
    }

    #[test]
    fn test_save_and_load() {
        let set = small_set();
        let file = NamedTempFile::new().unwrap();
        set.save(file.path(), true).unwrap();

        let loaded = EmojiMartSet::load(file.path()).unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn test_load_reports_path_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = EmojiMartSet::load(&path).unwrap_err();
        assert!(matches!(err, EmojiSetError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        file.flush().unwrap();
        assert!(matches!(
            EmojiMartSet::load(file.path()),
            Err(EmojiSetError::Json(_))
        ));
    }
}

//! CLI bootstrap - the composition root.
//!
//! Resolves configuration from the environment and command-line flags and
//! builds the [`CliContext`] handlers run against. The choice of
//! [`EmojiSupport`] implementation is made here and nowhere else.

use std::path::{Path, PathBuf};

use emojiset_core::{AllowList, EmojiMartSet, EmojiSupport, UnicodeEmojiSupport};

use crate::error::CliError;

/// Environment variable naming the default dataset file.
pub const DATA_ENV: &str = "EMOJISET_DATA";

/// Environment variable naming the default allow-list file.
pub const ALLOW_LIST_ENV: &str = "EMOJISET_ALLOW_LIST";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Dataset file.
    pub data_path: Option<PathBuf>,
    /// Supported-emoji list; the Unicode table is used when unset.
    pub allow_list: Option<PathBuf>,
}

impl CliConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            data_path: path(DATA_ENV),
            allow_list: path(ALLOW_LIST_ENV),
        }
    }

    /// Override the dataset path when `data` is given.
    #[must_use]
    pub fn with_data_path(mut self, data: Option<PathBuf>) -> Self {
        if data.is_some() {
            self.data_path = data;
        }
        self
    }
}

/// Composed context for CLI commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    config: CliConfig,
}

impl CliContext {
    /// The dataset path, or an argument error when none is configured.
    pub fn data_path(&self) -> Result<&Path, CliError> {
        self.config.data_path.as_deref().ok_or_else(|| {
            CliError::Arguments(format!("no dataset file given; pass --data or set {DATA_ENV}"))
        })
    }

    /// Load the configured dataset.
    pub fn load_dataset(&self) -> Result<EmojiMartSet, CliError> {
        let path = self.data_path()?;
        let set = EmojiMartSet::load(path)?;
        tracing::debug!(path = %path.display(), emojis = set.emojis.len(), "Loaded dataset");
        Ok(set)
    }

    /// Build the support port: `allow_list` if given, else the configured
    /// allow list, else the Unicode emoji table.
    pub fn support(&self, allow_list: Option<&Path>) -> Result<Box<dyn EmojiSupport>, CliError> {
        match allow_list.or(self.config.allow_list.as_deref()) {
            Some(path) => {
                let list = AllowList::load(path)?;
                if list.is_empty() {
                    tracing::warn!(path = %path.display(), "Allow list is empty, nothing is supported");
                }
                Ok(Box::new(list))
            }
            None => Ok(Box::new(UnicodeEmojiSupport::new())),
        }
    }
}

/// Bootstrap the CLI application.
pub fn bootstrap(config: CliConfig) -> CliContext {
    tracing::debug!(?config, "Bootstrapped CLI context");
    CliContext { config }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_from_lookup() {
        let config = CliConfig::from_lookup(lookup(&[
            (DATA_ENV, "/srv/emoji.json"),
            (ALLOW_LIST_ENV, "/srv/backend.txt"),
        ]));
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/emoji.json")));
        assert_eq!(config.allow_list, Some(PathBuf::from("/srv/backend.txt")));
    }

    #[test]
    fn test_empty_env_value_is_unset() {
        let config = CliConfig::from_lookup(lookup(&[(DATA_ENV, "")]));
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = CliConfig::from_lookup(lookup(&[(DATA_ENV, "env.json")]))
            .with_data_path(Some(PathBuf::from("flag.json")));
        assert_eq!(config.data_path, Some(PathBuf::from("flag.json")));

        let config = CliConfig::from_lookup(lookup(&[(DATA_ENV, "env.json")])).with_data_path(None);
        assert_eq!(config.data_path, Some(PathBuf::from("env.json")));
    }

    #[test]
    fn test_missing_data_path_is_argument_error() {
        let ctx = bootstrap(CliConfig::default());
        let err = ctx.data_path().unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains(DATA_ENV));
    }

    #[test]
    fn test_support_defaults_to_unicode() {
        let ctx = bootstrap(CliConfig::default());
        let support = ctx.support(None).unwrap();
        assert!(support.lookup("🦀").is_some());
    }

    #[test]
    fn test_support_prefers_flag_allow_list() {
        let dir = tempfile::tempdir().unwrap();
        let configured = dir.path().join("configured.txt");
        let flagged = dir.path().join("flagged.txt");
        std::fs::write(&configured, "1f600\n").unwrap();
        std::fs::write(&flagged, "1f44d\n").unwrap();

        let ctx = bootstrap(CliConfig {
            data_path: None,
            allow_list: Some(configured),
        });

        let support = ctx.support(None).unwrap();
        assert!(support.lookup("😀").is_some());
        assert!(support.lookup("👍").is_none());

        let support = ctx.support(Some(&flagged)).unwrap();
        assert!(support.lookup("👍").is_some());
        assert!(support.lookup("😀").is_none());
    }
}

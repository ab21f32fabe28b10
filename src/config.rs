//! Client configuration
//!
//! Collected from command-line flags and environment variables by the
//! binary; library code only sees the resolved values.

use crate::core::Word;
use crate::wordlists::WORDS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use anyhow::{Context, Result, ensure};
use std::path::PathBuf;

/// Game server used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:9000/";

/// Log file used when none is configured
pub const DEFAULT_LOG_FILE: &str = "terdle.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the game server's REST API
    pub api_base_url: String,
    /// Play against the in-process server instead of `api_base_url`
    pub offline: bool,
    pub log_file: PathBuf,
    /// Target words for offline play; the embedded list when `None`
    pub word_list: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            offline: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            word_list: None,
        }
    }
}

impl ClientConfig {
    /// Target words for offline play
    ///
    /// # Errors
    /// Returns an error if the configured file cannot be read or holds no
    /// valid words.
    pub fn target_words(&self) -> Result<Vec<Word>> {
        let Some(path) = &self.word_list else {
            return Ok(words_from_slice(WORDS));
        };

        let words = load_from_file(path)
            .with_context(|| format!("reading word list {}", path.display()))?;
        ensure!(
            !words.is_empty(),
            "word list {} contains no valid 5-letter words",
            path.display()
        );
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert!(!config.offline);
        assert_eq!(config.log_file, PathBuf::from("terdle.log"));
    }

    #[test]
    fn embedded_words_without_word_list() {
        let words = ClientConfig::default().target_words().unwrap();
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn missing_word_list_is_an_error() {
        let config = ClientConfig {
            word_list: Some(PathBuf::from("no/such/words.txt")),
            ..ClientConfig::default()
        };
        let err = config.target_words().unwrap_err();
        assert!(format!("{err:#}").contains("no/such/words.txt"));
    }

    #[test]
    fn word_list_without_valid_words_is_an_error() {
        let path = std::env::temp_dir().join(format!("terdle-empty-{}.txt", std::process::id()));
        std::fs::write(&path, "# nothing\nabc\ntoolong\n").unwrap();
        let config = ClientConfig {
            word_list: Some(path.clone()),
            ..ClientConfig::default()
        };

        let result = config.target_words();
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}

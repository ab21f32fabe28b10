//! Play command
//!
//! Connects the interactive client to the configured game server, or to the
//! in-process one for offline play.

use crate::config::ClientConfig;
use crate::console::StdConsole;
use crate::interactive::App;
use crate::services::{HttpAuthService, HttpGameService, InMemoryAuthService, InMemoryGameService};
use anyhow::Result;
use tracing::info;

/// Run an interactive session on stdin and stdout
///
/// # Errors
///
/// Returns an error if the offline word list cannot be loaded or the HTTP
/// client cannot be created. Errors during the session are reported on the
/// console and logged instead.
pub fn run_play(config: &ClientConfig) -> Result<()> {
    if config.offline {
        let words = config.target_words()?;
        info!(words = words.len(), "starting offline session");
        App::new(
            InMemoryGameService::new(words),
            InMemoryAuthService::default(),
            StdConsole::new(),
        )
        .run();
    } else {
        info!(api = %config.api_base_url, "starting session");
        App::new(
            HttpGameService::new(config.api_base_url.as_str())?,
            HttpAuthService::new(config.api_base_url.as_str())?,
            StdConsole::new(),
        )
        .run();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn offline_play_needs_a_readable_word_list() {
        let config = ClientConfig {
            offline: true,
            word_list: Some(PathBuf::from("no/such/list.txt")),
            ..ClientConfig::default()
        };
        assert!(run_play(&config).is_err());
    }
}

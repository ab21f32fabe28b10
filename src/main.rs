//! TErdle - CLI
//!
//! Console client for the TErdle word guessing game.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use terdle::{
    commands::{run_play, score_guess},
    config::{ClientConfig, DEFAULT_API_URL, DEFAULT_LOG_FILE},
    output::print_score_result,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "terdle",
    about = "Console client for the TErdle word guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the game server
    #[arg(long, global = true, env = "API_BASE_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Play against a built-in server instead of the game server
    #[arg(long, global = true, env = "TERDLE_OFFLINE")]
    offline: bool,

    /// File that receives the client's log
    #[arg(long, global = true, env = "TERDLE_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Target words for offline play, one per line (default: built-in list)
    #[arg(short = 'w', long, global = true, env = "TERDLE_WORD_LIST")]
    word_list: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and play through the menus (default)
    Play,

    /// Score a single guess against a target word
    Score {
        /// The word being guessed
        target: String,

        /// The guess to score
        guess: String,
    },
}

impl Cli {
    fn config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api_url.clone(),
            offline: self.offline,
            log_file: self.log_file.clone(),
            word_list: self.word_list.clone(),
        }
    }
}

/// Send log output to `path`, or to stderr if it cannot be opened
///
/// The level comes from `RUST_LOG` and defaults to `info`.
fn init_logging(path: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init(),
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
            tracing::warn!(path = %path.display(), error = %err, "log file unavailable, logging to stderr");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    init_logging(&config.log_file);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&config),
        Commands::Score { target, guess } => {
            let result = score_guess(&target, &guess)?;
            print_score_result(&result);
            Ok(())
        }
    }
}
